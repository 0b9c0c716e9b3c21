use shop_core::{StoreError, UniqueField};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    // -- Input ---------------------------------------------------------------
    #[error("Invalid {field}: {message} {location}")]
    Validation {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    // -- Uniqueness ----------------------------------------------------------
    #[error("Username already exists {location}")]
    DuplicateUsername { location: ErrorLocation },

    #[error("Email already exists {location}")]
    DuplicateEmail { location: ErrorLocation },

    #[error("Username or email already exists {location}")]
    RegistrationConflict { location: ErrorLocation },

    // -- Credentials ---------------------------------------------------------
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    // -- Token gate ----------------------------------------------------------
    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    // -- Internal ------------------------------------------------------------
    #[error("Password hashing failed: {source} {location}")]
    PasswordHash {
        #[source]
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },

    #[error("Invalid bcrypt cost {cost} (must be {min}-{max}) {location}")]
    InvalidCost {
        cost: u32,
        min: u32,
        max: u32,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Credential store failed: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Blocking task failed: {message} {location}")]
    BlockingTask {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Map a store-level unique violation onto the registration taxonomy.
    #[track_caller]
    pub fn from_unique_violation(field: Option<UniqueField>) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match field {
            Some(UniqueField::Username) => Self::DuplicateUsername { location },
            Some(UniqueField::Email) => Self::DuplicateEmail { location },
            None => Self::RegistrationConflict { location },
        }
    }

    #[track_caller]
    pub fn from_join(e: tokio::task::JoinError) -> Self {
        Self::BlockingTask {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True for every reason a bearer token can be refused. Callers must
    /// render all of them identically.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::MissingHeader { .. }
                | Self::InvalidScheme { .. }
                | Self::InvalidToken { .. }
                | Self::TokenExpired { .. }
                | Self::JwtDecode { .. }
                | Self::InvalidClaim { .. }
        )
    }

    /// True for failures unrelated to user input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::PasswordHash { .. }
                | Self::InvalidCost { .. }
                | Self::TokenEncode { .. }
                | Self::Store { .. }
                | Self::BlockingTask { .. }
        )
    }

    /// Machine-readable code exposed to clients.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::DuplicateUsername { .. } => "DUPLICATE_USERNAME",
            Self::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            Self::RegistrationConflict { .. } => "REGISTRATION_CONFLICT",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            e if e.is_unauthorized() => "UNAUTHORIZED",
            _ => "INTERNAL_ERROR",
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::Validation { field, .. } => Some(field.clone()),
            _ => None,
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
