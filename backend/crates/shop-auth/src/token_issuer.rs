use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// A freshly signed token and the instant it stops being accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    /// Unix seconds
    pub expires_at: i64,
}

/// Signs session tokens with the process-wide secret.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
    ttl: Duration,
}

impl TokenIssuer {
    /// HS256 issuer; every token lives for `ttl` from issuance.
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[track_caller]
    pub fn issue(&self, user_id: i64, username: &str) -> AuthErrorResult<IssuedToken> {
        self.issue_at(user_id, username, chrono::Utc::now().timestamp())
    }

    /// Issue as if the current time were `issued_at` (Unix seconds).
    #[track_caller]
    pub fn issue_at(
        &self,
        user_id: i64,
        username: &str,
        issued_at: i64,
    ) -> AuthErrorResult<IssuedToken> {
        let claims = Claims::new(user_id, username, issued_at, self.ttl);

        let token = encode(&self.header, &claims, &self.encoding_key).map_err(|e| {
            AuthError::TokenEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(IssuedToken {
            token,
            expires_at: claims.exp,
        })
    }
}
