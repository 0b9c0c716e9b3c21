pub mod credential_store;
pub mod error;
pub mod models;

pub use credential_store::CredentialStore;
pub use error::{StoreError, StoreResult, UniqueField};
pub use error_location::ErrorLocation;
pub use models::new_user::NewUser;
pub use models::user::User;
