//! API request/response models for employees.

use crate::db::models::employees::{Employee, EmployeeCreateDBRequest};
use crate::types::EmployeeId;
use crate::validation::{Constraint, FieldConstraint, FieldValue, Validate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration payload. Every field is optional at the parsing level so that missing
/// values surface as validation errors; any `id` in the body is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "firstName": "Ada",
    "lastName": "Lovelace",
    "department": "Engineering",
    "salary": 125000.5,
    "email": "ada@example.com",
    "phone": "0123456789",
    "location": "London"
}))]
pub struct EmployeeSubmission {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    #[schema(value_type = Option<f64>)]
    pub salary: Option<Decimal>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

fn first_name(s: &EmployeeSubmission) -> FieldValue<'_> {
    FieldValue::Text(s.first_name.as_deref())
}

fn last_name(s: &EmployeeSubmission) -> FieldValue<'_> {
    FieldValue::Text(s.last_name.as_deref())
}

fn department(s: &EmployeeSubmission) -> FieldValue<'_> {
    FieldValue::Text(s.department.as_deref())
}

fn salary(s: &EmployeeSubmission) -> FieldValue<'_> {
    FieldValue::Decimal(s.salary.as_ref())
}

fn email(s: &EmployeeSubmission) -> FieldValue<'_> {
    FieldValue::Text(s.email.as_deref())
}

fn phone(s: &EmployeeSubmission) -> FieldValue<'_> {
    FieldValue::Text(s.phone.as_deref())
}

fn location(s: &EmployeeSubmission) -> FieldValue<'_> {
    FieldValue::Text(s.location.as_deref())
}

static EMPLOYEE_SUBMISSION_CONSTRAINTS: &[FieldConstraint<EmployeeSubmission>] = &[
    FieldConstraint::new("firstName", Constraint::NotBlank, "first name can't be null", first_name),
    FieldConstraint::new("firstName", Constraint::MaxChars(30), "size must be between 0 and 30", first_name),
    FieldConstraint::new("lastName", Constraint::NotNull, "last name can't be null.", last_name),
    FieldConstraint::new("department", Constraint::NotBlank, "Department name must be provided", department),
    FieldConstraint::new("salary", Constraint::NonNegative, "salary can't be negative", salary),
    FieldConstraint::new("email", Constraint::Email, "Invalid email format", email),
    FieldConstraint::new("phone", Constraint::Digits(10), "Invalid phone number", phone),
    FieldConstraint::new("location", Constraint::NotBlank, "must not be blank", location),
    FieldConstraint::new("location", Constraint::MaxChars(50), "Provide the correct location", location),
];

impl Validate for EmployeeSubmission {
    fn constraints() -> &'static [FieldConstraint<Self>] {
        EMPLOYEE_SUBMISSION_CONSTRAINTS
    }
}

/// Copies a submission into an insert request. Callers validate first; required fields that
/// are somehow absent become empty strings rather than panicking.
impl From<EmployeeSubmission> for EmployeeCreateDBRequest {
    fn from(submission: EmployeeSubmission) -> Self {
        Self {
            first_name: submission.first_name.unwrap_or_default(),
            last_name: submission.last_name.unwrap_or_default(),
            department: submission.department.unwrap_or_default(),
            salary: submission.salary,
            email: submission.email,
            phone: submission.phone,
            location: submission.location.unwrap_or_default(),
        }
    }
}

/// API response for an employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    /// Serialized as a JSON number with every digit of the stored value
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    #[schema(value_type = Option<f64>)]
    pub salary: Option<Decimal>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            department: employee.department,
            salary: employee.salary,
            email: employee.email,
            phone: employee.phone,
            location: employee.location,
        }
    }
}
