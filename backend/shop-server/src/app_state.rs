use crate::ServerErrorResult;

use shop_auth::{
    CredentialRules, JwtValidator, LoginService, PasswordHasher, RegistrationService, TokenIssuer,
};
use shop_config::{Config, ValidationConfig};
use shop_core::CredentialStore;
use shop_db::UserRepository;

use std::sync::Arc;
use std::time::Duration;

use log::info;

/// Shared, read-only request state. Cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Profile lookups and the readiness probe
    pub users: UserRepository,
    pub registration: Arc<RegistrationService>,
    pub login: Arc<LoginService>,
    pub jwt_validator: Arc<JwtValidator>,
}

impl AppState {
    /// Wires both flows to the same repository and signing secret.
    pub fn new(
        users: UserRepository,
        hasher: PasswordHasher,
        secret: &[u8],
        token_ttl: Duration,
        rules: CredentialRules,
    ) -> ServerErrorResult<Self> {
        let store: Arc<dyn CredentialStore> = Arc::new(users.clone());
        let issuer = TokenIssuer::with_hs256(secret, token_ttl);

        let registration = RegistrationService::new(store.clone(), hasher, rules.clone());
        let login = LoginService::new(store, hasher, Arc::new(issuer), rules)?;

        info!(
            "Auth ready: bcrypt cost {}, token ttl {}s",
            hasher.cost(),
            token_ttl.as_secs()
        );

        Ok(Self {
            users,
            registration: Arc::new(registration),
            login: Arc::new(login),
            jwt_validator: Arc::new(JwtValidator::with_hs256(secret)),
        })
    }

    /// Call after `Config::validate()`.
    pub fn from_config(users: UserRepository, config: &Config) -> ServerErrorResult<Self> {
        let secret = config.auth.secret()?.as_bytes();
        let hasher = PasswordHasher::new(config.auth.bcrypt_cost)?;

        Self::new(
            users,
            hasher,
            secret,
            config.auth.token_ttl(),
            credential_rules(&config.validation),
        )
    }
}

pub fn credential_rules(validation: &ValidationConfig) -> CredentialRules {
    CredentialRules {
        min_username_length: validation.min_username_length,
        max_username_length: validation.max_username_length,
        min_password_length: validation.min_password_length,
        max_email_length: validation.max_email_length,
        max_phone_length: validation.max_phone_length,
    }
}
