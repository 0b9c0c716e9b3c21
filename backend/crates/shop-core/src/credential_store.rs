use crate::{NewUser, StoreResult, User};

use async_trait::async_trait;

/// Persistence seam for user identity records.
///
/// Implementations own durability and must enforce uniqueness of `username`
/// and `email` themselves; callers treat [`StoreError::UniqueViolation`]
/// as the final word on conflicts.
///
/// [`StoreError::UniqueViolation`]: crate::StoreError::UniqueViolation
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>>;

    /// Exact, case-sensitive match.
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Insert a new record and return it with its store-assigned id.
    async fn insert(&self, user: NewUser) -> StoreResult<User>;
}
