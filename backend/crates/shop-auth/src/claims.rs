use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id as a decimal string)
    pub sub: String,
    pub user_id: i64,
    pub username: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: i64, username: &str, issued_at: i64, ttl: Duration) -> Self {
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);

        Self {
            sub: user_id.to_string(),
            user_id,
            username: username.to_string(),
            iat: issued_at,
            exp: issued_at.saturating_add(ttl_secs),
        }
    }

    /// A token is dead from the instant of `exp` onward.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }

    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.user_id <= 0 {
            return Err(AuthError::InvalidClaim {
                claim: "user_id".to_string(),
                message: "user_id must be positive".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.sub != self.user_id.to_string() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub does not match user_id".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.username.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "username".to_string(),
                message: "username cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.iat > self.exp {
            return Err(AuthError::InvalidClaim {
                claim: "iat".to_string(),
                message: "issued after expiry".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
