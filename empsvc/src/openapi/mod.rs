//! OpenAPI documentation for the employee API.
//!
//! The document is served as JSON at `/api-docs/openapi.json` and rendered with Scalar at
//! `/docs` when `enable_docs` is set.

use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::employees::list_employees,
        api::handlers::employees::get_employee,
        api::handlers::employees::register_employee,
    ),
    components(
        schemas(
            api::models::employees::EmployeeSubmission,
            api::models::employees::EmployeeResponse,
        )
    ),
    tags(
        (name = "employees", description = "Register and look up employee records.

Registration validates every field and reports all violations at once, as an object mapping
each invalid field to its message. Email addresses are unique across employees."),
    ),
    info(
        title = "Employee API",
        version = "1.0.0",
        description = "Create and read employee records.

## Errors

Lookups of unknown employees and duplicate registrations return a single message:

```json
{
  \"error message \": \"The user with user id 42 is not present.\"
}
```

Note the trailing space in the key.",
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_employee_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert_eq!(paths, vec!["/employee/fetchAll", "/employee/register", "/employee/{id}"]);
        assert!(doc.paths.paths["/employee/register"].post.is_some());
    }

    #[test]
    fn document_serializes() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(json["components"]["schemas"]["EmployeeSubmission"].is_object());
    }
}
