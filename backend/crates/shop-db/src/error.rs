use shop_core::{StoreError, UniqueField};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint failed on {field:?} {location}")]
    UniqueViolation {
        field: Option<UniqueField>,
        location: ErrorLocation,
    },

    #[error("Migration error: {source} {location}")]
    Migration {
        source: sqlx::migrate::MigrateError,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(db_error) = &source
            && db_error.is_unique_violation()
        {
            return Self::UniqueViolation {
                field: conflicting_field(db_error.message()),
                location,
            };
        }

        Self::Sqlx { source, location }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for StoreError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            DbError::UniqueViolation { field, .. } => StoreError::UniqueViolation { field, location },
            DbError::Initialization { message, .. } => {
                StoreError::CorruptRecord { message, location }
            }
            other => StoreError::Backend {
                message: other.to_string(),
                location,
            },
        }
    }
}

/// SQLite reports `UNIQUE constraint failed: users.username`.
fn conflicting_field(message: &str) -> Option<UniqueField> {
    if message.contains("users.username") {
        Some(UniqueField::Username)
    } else if message.contains("users.email") {
        Some(UniqueField::Email)
    } else {
        None
    }
}

pub type Result<T> = std::result::Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::conflicting_field;

    use shop_core::UniqueField;

    #[test]
    fn conflicting_field_reads_sqlite_messages() {
        assert_eq!(
            conflicting_field("UNIQUE constraint failed: users.username"),
            Some(UniqueField::Username)
        );
        assert_eq!(
            conflicting_field("UNIQUE constraint failed: users.email"),
            Some(UniqueField::Email)
        );
        assert_eq!(conflicting_field("UNIQUE constraint failed: index 'x'"), None);
    }
}
