use crate::error::StorageError;
use crate::mapping::Mapping;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of the mapping store.
///
/// This trait provides only the read operations from [`Repository`],
/// allowing the resolver to have read-only access.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the mapping for a given short code, expired or not.
    /// Returns `None` if the code was never assigned. Expiry is the
    /// caller's concern; the store reports what it holds.
    async fn get(&self, code: &ShortCode) -> Result<Option<Mapping>>;

    /// Checks whether a short code is already taken.
    ///
    /// Expired codes still count as taken: codes are never reused.
    async fn exists(&self, code: &ShortCode) -> Result<bool>;
}

/// The full mapping store contract.
///
/// Implementations must enforce short code uniqueness atomically at
/// insert time and signal a duplicate with [`StorageError::Conflict`].
/// Callers cannot assume exclusive access between an `exists` check and
/// the insert that follows it.
#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new mapping. Fails with [`StorageError::Conflict`] if
    /// the code already exists, live or expired.
    async fn insert(&self, code: &ShortCode, mapping: Mapping) -> Result<()>;
}
