use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Absolute bounds. The users table caps username at 50 and email at 100.
pub const MIN_USERNAME_LENGTH: usize = 1;
pub const MAX_USERNAME_LENGTH: usize = 50;
pub const DEFAULT_MIN_USERNAME_LENGTH: usize = 3;
pub const DEFAULT_MAX_USERNAME_LENGTH: usize = 50;

pub const MIN_PASSWORD_LENGTH: usize = 1;
pub const MAX_PASSWORD_LENGTH: usize = 72;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

pub const MIN_EMAIL_LENGTH: usize = 5;
pub const MAX_EMAIL_LENGTH: usize = 100;
pub const DEFAULT_MAX_EMAIL_LENGTH: usize = 100;

pub const MIN_PHONE_LENGTH: usize = 1;
pub const MAX_PHONE_LENGTH: usize = 32;
pub const DEFAULT_MAX_PHONE_LENGTH: usize = 15;

/// Field limits applied to registration input before it reaches the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_username_length: usize,
    pub max_username_length: usize,
    pub min_password_length: usize,
    pub max_email_length: usize,
    pub max_phone_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_username_length: DEFAULT_MIN_USERNAME_LENGTH,
            max_username_length: DEFAULT_MAX_USERNAME_LENGTH,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_email_length: DEFAULT_MAX_EMAIL_LENGTH,
            max_phone_length: DEFAULT_MAX_PHONE_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range(
            "min_username_length",
            self.min_username_length,
            MIN_USERNAME_LENGTH,
            MAX_USERNAME_LENGTH,
        )?;
        Self::check_range(
            "max_username_length",
            self.max_username_length,
            MIN_USERNAME_LENGTH,
            MAX_USERNAME_LENGTH,
        )?;

        if self.min_username_length > self.max_username_length {
            return Err(ConfigError::validation(format!(
                "validation.min_username_length ({}) exceeds max_username_length ({})",
                self.min_username_length, self.max_username_length
            )));
        }

        Self::check_range(
            "min_password_length",
            self.min_password_length,
            MIN_PASSWORD_LENGTH,
            MAX_PASSWORD_LENGTH,
        )?;
        Self::check_range(
            "max_email_length",
            self.max_email_length,
            MIN_EMAIL_LENGTH,
            MAX_EMAIL_LENGTH,
        )?;
        Self::check_range(
            "max_phone_length",
            self.max_phone_length,
            MIN_PHONE_LENGTH,
            MAX_PHONE_LENGTH,
        )?;

        Ok(())
    }

    #[track_caller]
    fn check_range(name: &str, value: usize, min: usize, max: usize) -> ConfigErrorResult<()> {
        if value < min || value > max {
            return Err(ConfigError::validation(format!(
                "validation.{} must be {}-{}, got {}",
                name, min, max, value
            )));
        }
        Ok(())
    }
}
