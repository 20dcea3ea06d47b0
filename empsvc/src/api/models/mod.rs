//! Request and response types for the REST API.
//!
//! These are the wire shapes: camelCase field names and OpenAPI schemas via
//! [`utoipa::ToSchema`]. Conversions to and from the database models live alongside them.

pub mod employees;
