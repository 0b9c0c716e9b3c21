use crate::{AuthContext, AuthError, Claims, Result as AuthErrorResult, bearer_token};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Stateless token verifier: signature and expiry only, no store lookups.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared against the caller's clock in `validate_at`.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate JWT token against the current time and return claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        self.validate_at(token, chrono::Utc::now().timestamp())
    }

    /// Validate as if the current time were `now` (Unix seconds).
    #[track_caller]
    pub fn validate_at(&self, token: &str, now: i64) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| AuthError::JwtDecode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        let claims = token_data.claims;

        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        claims.validate()?;

        Ok(claims)
    }

    /// Full gate check on a raw `Authorization` header value.
    #[track_caller]
    pub fn authorize(&self, authorization: Option<&str>) -> AuthErrorResult<AuthContext> {
        self.authorize_at(authorization, chrono::Utc::now().timestamp())
    }

    #[track_caller]
    pub fn authorize_at(
        &self,
        authorization: Option<&str>,
        now: i64,
    ) -> AuthErrorResult<AuthContext> {
        let token = bearer_token(authorization)?;
        let claims = self.validate_at(token, now)?;
        Ok(AuthContext::from_claims(claims))
    }
}
