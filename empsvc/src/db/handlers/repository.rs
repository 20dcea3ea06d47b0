//! Base repository trait for database operations.
//!
//! A repository is a data access layer for a postgres table. It provides methods for
//! creating and reading entities. Records in this service are insert-only, so there are no
//! update or delete operations.

use crate::db::errors::Result;

/// Base repository trait providing common database operations
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by ID
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// List every entity in insertion order
    async fn list(&mut self) -> Result<Vec<Self::Response>>;
}
