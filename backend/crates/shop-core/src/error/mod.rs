use crate::ErrorLocation;

use std::fmt;
use std::result::Result as StdResult;

use thiserror::Error;

/// Column whose unique constraint rejected an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Email,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => f.write_str("username"),
            Self::Email => f.write_str("email"),
        }
    }
}

/// Errors surfaced by a [`CredentialStore`](crate::CredentialStore) implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A uniqueness constraint fired. `field` is `None` when the backend
    /// cannot tell which column conflicted.
    #[error("Unique constraint violated on {} {location}", describe_field(.field))]
    UniqueViolation {
        field: Option<UniqueField>,
        location: ErrorLocation,
    },

    #[error("Store backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },

    #[error("Corrupt stored record: {message} {location}")]
    CorruptRecord {
        message: String,
        location: ErrorLocation,
    },
}

fn describe_field(field: &Option<UniqueField>) -> String {
    field
        .map(|f| f.to_string())
        .unwrap_or_else(|| String::from("unknown column"))
}

pub type StoreResult<T> = StdResult<T, StoreError>;
