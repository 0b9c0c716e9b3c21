mod claims;
mod credential_rules;

use crate::{CredentialRules, PasswordHasher, RegistrationRequest, TokenIssuer};

use std::time::Duration;

pub(crate) const TEST_JWT_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// bcrypt's minimum cost keeps the suite fast.
pub(crate) fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(PasswordHasher::MIN_COST).unwrap()
}

pub(crate) fn test_issuer() -> TokenIssuer {
    TokenIssuer::with_hs256(TEST_JWT_SECRET, Duration::from_secs(24 * 60 * 60))
}

pub(crate) fn test_rules() -> CredentialRules {
    CredentialRules::default()
}

pub(crate) fn alice_request() -> RegistrationRequest {
    RegistrationRequest {
        username: "alice".to_string(),
        email: "a@x.com".to_string(),
        password: "secret1".to_string(),
        phone: "555".to_string(),
    }
}
