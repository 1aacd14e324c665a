//! Base repository trait for database operations.

use crate::db::errors::Result;

/// Base repository trait providing the operations every entity shares.
///
/// Each implementor wraps a `PgConnection` and declares its own request,
/// response, id, and filter types. Domain updates in this system are narrow,
/// single-transition affairs (a box opens or closes, a membership toggles), so
/// there is deliberately no generic `update`; those live as inherent methods
/// on the repository that owns them.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// The filter type for list operations
    type Filter: Send + Sync;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by ID
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// List entities matching a filter
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>>;

    /// Delete an entity by ID, reporting whether a row was removed
    async fn delete(&mut self, id: Self::Id) -> Result<bool>;
}
