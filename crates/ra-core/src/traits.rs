//! Core traits shared by models, forms and list logic

use async_trait::async_trait;

use crate::result::AdminResult;

/// Primary key type
pub type Id = i64;

/// Trait for entities that have a primary key
pub trait Identifiable {
    fn id(&self) -> Id;
}

/// Data-access collaborator (repository pattern)
///
/// `T` is the stored record, `P` the write payload. Implementations live
/// outside this workspace; any failure is reported as an [`AdminError`]
/// and treated as opaque by callers.
///
/// [`AdminError`]: crate::error::AdminError
#[async_trait]
pub trait Repository<T, P>: Send + Sync
where
    T: Send + Sync,
    P: Send + Sync,
{
    /// Fetch every record
    async fn find_all(&self) -> AdminResult<Vec<T>>;

    /// Create a new record from a payload
    async fn create(&self, payload: &P) -> AdminResult<T>;

    /// Update an existing record
    async fn update(&self, id: Id, payload: &P) -> AdminResult<T>;

    /// Delete a record
    async fn delete(&self, id: Id) -> AdminResult<()>;
}
