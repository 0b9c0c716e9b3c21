//! bcrypt password hashing.
//!
//! Each hash embeds its own random salt and cost, so hashing the same
//! password twice yields different strings that both verify.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Outcome of checking a password against a stored hash.
///
/// Only ever used server-side; everything but `Match` is reported to
/// clients as invalid credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCheck {
    Match,
    Mismatch,
    MalformedHash,
}

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 31;

    #[track_caller]
    pub fn new(cost: u32) -> AuthErrorResult<Self> {
        if !(Self::MIN_COST..=Self::MAX_COST).contains(&cost) {
            return Err(AuthError::InvalidCost {
                cost,
                min: Self::MIN_COST,
                max: Self::MAX_COST,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| AuthError::PasswordHash {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn check(&self, plaintext: &str, hash: &str) -> PasswordCheck {
        match bcrypt::verify(plaintext, hash) {
            Ok(true) => PasswordCheck::Match,
            Ok(false) => PasswordCheck::Mismatch,
            Err(_) => PasswordCheck::MalformedHash,
        }
    }

    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        self.check(plaintext, hash) == PasswordCheck::Match
    }
}
