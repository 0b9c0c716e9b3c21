pub mod auth_context;
pub mod bearer_token;
pub mod claims;
pub mod credential_rules;
pub mod error;
pub mod jwt_validator;
pub mod login_service;
pub mod password_hasher;
pub mod registration_service;
pub mod token_issuer;

pub use auth_context::AuthContext;
pub use bearer_token::bearer_token;
pub use claims::Claims;
pub use credential_rules::CredentialRules;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use login_service::{LoginOutcome, LoginRequest, LoginService, UserProfile};
pub use password_hasher::{PasswordCheck, PasswordHasher};
pub use registration_service::{RegisteredUser, RegistrationRequest, RegistrationService};
pub use token_issuer::{IssuedToken, TokenIssuer};

#[cfg(test)]
mod tests;
