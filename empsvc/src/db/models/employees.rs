//! Database models for employee records.

use crate::types::EmployeeId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Table holding employee rows.
pub const EMPLOYEE_TABLE: &str = "employee";

/// Unique constraint on `employee.email`, as named in the migration. Both stores report
/// duplicate emails under this name.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "employee_email_key";

/// Database representation of an employee row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub salary: Option<Decimal>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: String,
}

/// Request to insert a new employee. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCreateDBRequest {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub salary: Option<Decimal>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: String,
}

/// Response from database after creating or fetching an employee
pub type EmployeeDBResponse = Employee;

impl Employee {
    /// Attach a store-assigned identifier to an insert request.
    pub fn from_request(id: EmployeeId, request: &EmployeeCreateDBRequest) -> Self {
        Self {
            id,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            department: request.department.clone(),
            salary: request.salary,
            email: request.email.clone(),
            phone: request.phone.clone(),
            location: request.location.clone(),
        }
    }
}
