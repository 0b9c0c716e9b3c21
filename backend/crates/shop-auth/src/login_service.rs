//! Login flow: look up by username, verify the password, issue a token.
//!
//! Unknown usernames and wrong passwords produce the same
//! `InvalidCredentials` error. An unknown username still pays for one bcrypt
//! verification against a throwaway hash so both paths cost about the same.

use crate::{
    AuthError, PasswordCheck, PasswordHasher, Result as AuthErrorResult, TokenIssuer,
    credential_rules::CredentialRules,
};

use shop_core::{CredentialStore, User};

use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};

const TIMING_PLACEHOLDER_PASSWORD: &str = "timing-placeholder-password";

#[derive(Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account fields a logged-in user may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    /// Unix seconds
    pub expires_at: i64,
    pub user: UserProfile,
}

pub struct LoginService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    issuer: Arc<TokenIssuer>,
    rules: CredentialRules,
    placeholder_hash: String,
}

impl LoginService {
    /// Hashes the timing placeholder once, at the configured cost.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        issuer: Arc<TokenIssuer>,
        rules: CredentialRules,
    ) -> AuthErrorResult<Self> {
        let placeholder_hash = hasher.hash(TIMING_PLACEHOLDER_PASSWORD)?;

        Ok(Self {
            store,
            hasher,
            issuer,
            rules,
            placeholder_hash,
        })
    }

    pub async fn login(&self, request: LoginRequest) -> AuthErrorResult<LoginOutcome> {
        self.rules.validate_login(&request)?;

        let LoginRequest { username, password } = request;

        let Some(user) = self.store.find_by_username(&username).await? else {
            // Result ignored; the bcrypt cost is paid so unknown users time like wrong passwords.
            let _ = self
                .check_password(password, self.placeholder_hash.clone())
                .await?;
            debug!("Login failed: unknown username {}", username);
            return Err(AuthError::invalid_credentials());
        };

        match self
            .check_password(password, user.password_hash.clone())
            .await?
        {
            PasswordCheck::Match => {}
            PasswordCheck::Mismatch => {
                debug!("Login failed: wrong password for user {}", user.id);
                return Err(AuthError::invalid_credentials());
            }
            PasswordCheck::MalformedHash => {
                warn!("Stored password hash for user {} is malformed", user.id);
                return Err(AuthError::invalid_credentials());
            }
        }

        let issued = self.issuer.issue(user.id, &user.username)?;

        info!("User {} ({}) logged in", user.id, user.username);

        Ok(LoginOutcome {
            token: issued.token,
            expires_at: issued.expires_at,
            user: UserProfile::from(&user),
        })
    }

    async fn check_password(&self, password: String, hash: String) -> AuthErrorResult<PasswordCheck> {
        let hasher = self.hasher;
        tokio::task::spawn_blocking(move || hasher.check(&password, &hash))
            .await
            .map_err(AuthError::from_join)
    }
}
