//! Registration flow: validate, pre-check uniqueness, hash, insert.
//!
//! The username/email pre-checks race with concurrent registrations. The
//! store's unique constraints decide; a violation on insert is mapped back to
//! `DuplicateUsername` / `DuplicateEmail`, or `RegistrationConflict` when the
//! store cannot say which column fired.

use crate::{AuthError, CredentialRules, PasswordHasher, Result as AuthErrorResult};

use shop_core::{CredentialStore, NewUser, StoreError};

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{info, warn};

/// Candidate account as received at the boundary.
#[derive(Clone)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phone", &self.phone)
            .finish()
    }
}

/// Safe-to-expose summary of a created account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    pub id: i64,
    pub username: String,
    pub email: String,
}

pub struct RegistrationService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    rules: CredentialRules,
}

impl RegistrationService {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        rules: CredentialRules,
    ) -> Self {
        Self {
            store,
            hasher,
            rules,
        }
    }

    pub async fn register(&self, request: RegistrationRequest) -> AuthErrorResult<RegisteredUser> {
        self.rules.validate_registration(&request)?;

        if self.store.find_by_username(&request.username).await?.is_some() {
            warn!("Registration rejected: username {} taken", request.username);
            return Err(AuthError::DuplicateUsername {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.store.find_by_email(&request.email).await?.is_some() {
            warn!("Registration rejected: email already registered");
            return Err(AuthError::DuplicateEmail {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let RegistrationRequest {
            username,
            email,
            password,
            phone,
        } = request;

        let hasher = self.hasher;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(AuthError::from_join)??;

        let user = self
            .store
            .insert(NewUser {
                username,
                email,
                password_hash,
                phone,
            })
            .await
            .map_err(|e| match e {
                StoreError::UniqueViolation { field, .. } => {
                    warn!("Registration lost a uniqueness race on {:?}", field);
                    AuthError::from_unique_violation(field)
                }
                other => AuthError::from(other),
            })?;

        info!("Registered user {} ({})", user.id, user.username);

        Ok(RegisteredUser {
            id: user.id,
            username: user.username,
            email: user.email,
        })
    }
}
