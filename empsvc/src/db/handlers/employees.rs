//! Database repository for employee records.

use crate::{
    db::{
        errors::Result,
        handlers::repository::Repository,
        models::employees::{Employee, EmployeeCreateDBRequest, EmployeeDBResponse},
    },
    types::EmployeeId,
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Employees<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Employees<'c> {
    /// Create a new Employees repository instance
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Employees<'c> {
    type CreateRequest = EmployeeCreateDBRequest;
    type Response = EmployeeDBResponse;
    type Id = EmployeeId;

    #[instrument(skip(self, request), fields(department = %request.department), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employee (first_name, last_name, department, salary, email, phone, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, department, salary, email, phone, location
            "#,
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.department)
        .bind(request.salary)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.location)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(employee)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, first_name, last_name, department, salary, email, phone, location
            FROM employee
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(employee)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, first_name, last_name, department, salary, email, phone, location
            FROM employee
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(employees)
    }
}
