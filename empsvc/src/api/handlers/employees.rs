//! HTTP handlers for employee endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::{
    AppState,
    api::models::employees::{EmployeeResponse, EmployeeSubmission},
    errors::{Error, Result},
    types::EmployeeId,
    validation::ValidatedJson,
};

#[utoipa::path(
    get,
    path = "/employee/fetchAll",
    tag = "employees",
    summary = "List employees",
    description = "Return every registered employee in registration order",
    responses(
        (status = 200, description = "All employees", body = [EmployeeResponse]),
        (status = 204, description = "No employees have been registered"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_employees(State(state): State<AppState>) -> Result<Response> {
    let employees = state.store.find_all().await?;

    if employees.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body: Vec<EmployeeResponse> = employees.into_iter().map(Into::into).collect();
    Ok(Json(body).into_response())
}

#[utoipa::path(
    get,
    path = "/employee/{id}",
    tag = "employees",
    summary = "Get employee",
    description = "Fetch a single employee by identifier",
    params(
        ("id" = i32, Path, description = "Employee identifier"),
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 404, description = "No employee with this identifier"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_employee(State(state): State<AppState>, Path(id): Path<EmployeeId>) -> Result<Json<EmployeeResponse>> {
    let employee = state.store.find_by_id(id).await?.ok_or(Error::RecordNotFound { id })?;

    Ok(Json(employee.into()))
}

#[utoipa::path(
    post,
    path = "/employee/register",
    tag = "employees",
    summary = "Register employee",
    description = "Validate a submission and store it as a new employee. All field violations are reported together.",
    request_body = EmployeeSubmission,
    responses(
        (status = 201, description = "Employee registered", body = EmployeeResponse),
        (status = 400, description = "One message per invalid field"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn register_employee(
    State(state): State<AppState>,
    ValidatedJson(submission): ValidatedJson<EmployeeSubmission>,
) -> Result<(StatusCode, Json<EmployeeResponse>)> {
    let created = state.store.create(&submission.into()).await?;
    info!(id = created.id, "Registered employee");

    Ok((StatusCode::CREATED, Json(created.into())))
}
