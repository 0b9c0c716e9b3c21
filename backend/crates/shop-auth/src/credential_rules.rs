use crate::{AuthError, LoginRequest, RegistrationRequest, Result as AuthErrorResult};

use std::sync::LazyLock;

use regex::Regex;

/// bcrypt only reads the first 72 bytes of a password.
pub const MAX_PASSWORD_BYTES: usize = 72;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Boundary checks run before any store or hasher work.
#[derive(Debug, Clone)]
pub struct CredentialRules {
    pub min_username_length: usize,
    pub max_username_length: usize,
    pub min_password_length: usize,
    pub max_email_length: usize,
    pub max_phone_length: usize,
}

impl Default for CredentialRules {
    fn default() -> Self {
        Self {
            min_username_length: 3,
            max_username_length: 50,
            min_password_length: 6,
            max_email_length: 100,
            max_phone_length: 15,
        }
    }
}

impl CredentialRules {
    #[track_caller]
    pub fn validate_registration(&self, request: &RegistrationRequest) -> AuthErrorResult<()> {
        self.validate_username(&request.username)?;
        self.validate_email(&request.email)?;
        self.validate_password(&request.password)?;
        self.validate_phone(&request.phone)?;
        Ok(())
    }

    /// Login only checks presence.
    #[track_caller]
    pub fn validate_login(&self, request: &LoginRequest) -> AuthErrorResult<()> {
        if request.username.is_empty() {
            return Err(AuthError::validation("username", "username is required"));
        }
        if request.password.is_empty() {
            return Err(AuthError::validation("password", "password is required"));
        }
        Ok(())
    }

    #[track_caller]
    fn validate_username(&self, username: &str) -> AuthErrorResult<()> {
        if username.trim() != username {
            return Err(AuthError::validation(
                "username",
                "username cannot start or end with whitespace",
            ));
        }

        let length = username.chars().count();
        if length < self.min_username_length || length > self.max_username_length {
            return Err(AuthError::validation(
                "username",
                format!(
                    "username must be {}-{} characters, got {}",
                    self.min_username_length, self.max_username_length, length
                ),
            ));
        }

        Ok(())
    }

    #[track_caller]
    fn validate_email(&self, email: &str) -> AuthErrorResult<()> {
        if email.chars().count() > self.max_email_length {
            return Err(AuthError::validation(
                "email",
                format!("email exceeds {} characters", self.max_email_length),
            ));
        }

        if !EMAIL_PATTERN.is_match(email) {
            return Err(AuthError::validation("email", "email format is invalid"));
        }

        Ok(())
    }

    #[track_caller]
    fn validate_password(&self, password: &str) -> AuthErrorResult<()> {
        if password.chars().count() < self.min_password_length {
            return Err(AuthError::validation(
                "password",
                format!(
                    "password must be at least {} characters",
                    self.min_password_length
                ),
            ));
        }

        if password.len() > MAX_PASSWORD_BYTES {
            return Err(AuthError::validation(
                "password",
                format!("password cannot exceed {} bytes", MAX_PASSWORD_BYTES),
            ));
        }

        Ok(())
    }

    #[track_caller]
    fn validate_phone(&self, phone: &str) -> AuthErrorResult<()> {
        if phone.trim().is_empty() {
            return Err(AuthError::validation("phone", "phone is required"));
        }

        if phone.chars().count() > self.max_phone_length {
            return Err(AuthError::validation(
                "phone",
                format!("phone exceeds {} characters", self.max_phone_length),
            ));
        }

        Ok(())
    }
}
