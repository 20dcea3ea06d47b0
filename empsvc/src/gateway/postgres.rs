use sqlx::PgPool;
use tracing::instrument;

use super::EmployeeStore;
use crate::db::errors::Result;
use crate::db::handlers::{Employees, Repository};
use crate::db::models::employees::{Employee, EmployeeCreateDBRequest};
use crate::types::EmployeeId;

/// [`EmployeeStore`] backed by PostgreSQL.
///
/// Each call acquires its own pooled connection; the store holds no other state.
#[derive(Clone)]
pub struct PostgresEmployeeStore {
    pool: PgPool,
}

impl PostgresEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl EmployeeStore for PostgresEmployeeStore {
    #[instrument(skip_all, err)]
    async fn create(&self, request: &EmployeeCreateDBRequest) -> Result<Employee> {
        let mut conn = self.pool.acquire().await?;
        Employees::new(&mut conn).create(request).await
    }

    #[instrument(skip(self), err)]
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>> {
        let mut conn = self.pool.acquire().await?;
        Employees::new(&mut conn).get_by_id(id).await
    }

    #[instrument(skip(self), err)]
    async fn find_all(&self) -> Result<Vec<Employee>> {
        let mut conn = self.pool.acquire().await?;
        Employees::new(&mut conn).list().await
    }
}
