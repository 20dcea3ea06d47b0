//! In-memory employee store.
//!
//! Records live in a vector guarded by a single lock, so the email uniqueness check and the
//! insert happen atomically. Suitable for tests and local development only; nothing survives a
//! restart.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::EmployeeStore;
use crate::db::errors::{DbError, Result};
use crate::db::models::employees::{EMAIL_UNIQUE_CONSTRAINT, EMPLOYEE_TABLE, Employee, EmployeeCreateDBRequest};
use crate::types::EmployeeId;

#[derive(Default)]
struct Rows {
    employees: Vec<Employee>,
    last_id: EmployeeId,
}

/// In-memory implementation of [`EmployeeStore`].
#[derive(Clone, Default)]
pub struct InMemoryEmployeeStore {
    rows: Arc<RwLock<Rows>>,
}

impl InMemoryEmployeeStore {
    /// Create a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    #[instrument(skip_all, err)]
    async fn create(&self, request: &EmployeeCreateDBRequest) -> Result<Employee> {
        let mut rows = self.rows.write().await;

        if let Some(email) = request.email.as_deref()
            && rows.employees.iter().any(|e| e.email.as_deref() == Some(email))
        {
            return Err(DbError::UniqueViolation {
                constraint: Some(EMAIL_UNIQUE_CONSTRAINT.to_string()),
                table: Some(EMPLOYEE_TABLE.to_string()),
                message: format!("Key (email)=({email}) already exists."),
            });
        }

        let id = rows
            .last_id
            .checked_add(1)
            .ok_or_else(|| DbError::Other(anyhow::anyhow!("employee identifier space exhausted")))?;
        let employee = Employee::from_request(id, request);

        rows.last_id = id;
        rows.employees.push(employee.clone());
        debug!(id, "Stored employee in memory");

        Ok(employee)
    }

    #[instrument(skip(self), err)]
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>> {
        let rows = self.rows.read().await;
        Ok(rows.employees.iter().find(|e| e.id == id).cloned())
    }

    #[instrument(skip(self), err)]
    async fn find_all(&self) -> Result<Vec<Employee>> {
        Ok(self.rows.read().await.employees.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn request(email: Option<&str>) -> EmployeeCreateDBRequest {
        EmployeeCreateDBRequest {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            department: "Research".to_string(),
            salary: Some(Decimal::new(90_000, 0)),
            email: email.map(str::to_string),
            phone: Some("5551234567".to_string()),
            location: "Arlington".to_string(),
        }
    }

    #[tokio::test]
    async fn ids_start_at_one_and_increase() {
        let store = InMemoryEmployeeStore::new();

        let first = store.create(&request(Some("a@example.com"))).await.unwrap();
        let second = store.create(&request(Some("b@example.com"))).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first, Employee::from_request(1, &request(Some("a@example.com"))));
    }

    #[tokio::test]
    async fn find_by_id_reports_absence_as_none() {
        let store = InMemoryEmployeeStore::new();
        assert_eq!(store.find_by_id(1).await.unwrap(), None);

        let created = store.create(&request(Some("a@example.com"))).await.unwrap();
        assert_eq!(store.find_by_id(created.id).await.unwrap(), Some(created));
        assert_eq!(store.find_by_id(-1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let store = InMemoryEmployeeStore::new();
        assert!(store.find_all().await.unwrap().is_empty());

        let a = store.create(&request(Some("a@example.com"))).await.unwrap();
        let b = store.create(&request(Some("b@example.com"))).await.unwrap();

        assert_eq!(store.find_all().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_without_consuming_an_id() {
        let store = InMemoryEmployeeStore::new();
        store.create(&request(Some("dup@example.com"))).await.unwrap();

        let err = store.create(&request(Some("dup@example.com"))).await.unwrap_err();
        assert!(err.is_duplicate_email());

        let next = store.create(&request(Some("other@example.com"))).await.unwrap();
        assert_eq!(next.id, 2);
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn records_without_email_never_conflict() {
        let store = InMemoryEmployeeStore::new();
        store.create(&request(None)).await.unwrap();
        store.create(&request(None)).await.unwrap();

        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn concurrent_registrations_with_same_email_admit_exactly_one() {
        let store = InMemoryEmployeeStore::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.create(&request(Some("race@example.com"))).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }
}
