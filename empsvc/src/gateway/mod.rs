//! Persistence gateway for employee records.
//!
//! Handlers never talk to a database directly. They hold an [`EmployeeStore`] (injected via
//! [`crate::AppState`]) which exposes the three operations the service needs. Two stores are
//! provided:
//!
//! - [`PostgresEmployeeStore`]: production store backed by a [`sqlx::PgPool`], delegating to the
//!   [`crate::db::handlers::Employees`] repository.
//! - [`InMemoryEmployeeStore`]: process-local store for development and tests. Data is lost on
//!   restart.
//!
//! Both honour the same contract: identifiers are assigned by the store and strictly increase,
//! non-null emails are unique, and missing records are reported as `Ok(None)` rather than an
//! error.

use crate::db::errors::Result;
use crate::db::models::employees::{Employee, EmployeeCreateDBRequest};
use crate::types::EmployeeId;

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryEmployeeStore;
pub use postgres::PostgresEmployeeStore;

/// Storage contract for employee records.
#[async_trait::async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Persist a new record and return it with its assigned identifier.
    ///
    /// # Errors
    /// - `DbError::UniqueViolation` if another record already uses the email
    async fn create(&self, request: &EmployeeCreateDBRequest) -> Result<Employee>;

    /// Look up a record. Absence is `Ok(None)`.
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>>;

    /// Snapshot of every record, in insertion order.
    async fn find_all(&self) -> Result<Vec<Employee>>;
}
