//! HTTP request handlers for the REST API.
//!
//! Handlers extract state and input, delegate to the configured
//! [`EmployeeStore`](crate::gateway::EmployeeStore), and return either a JSON body or an
//! [`Error`](crate::errors::Error) that renders itself.
//!
//! - [`employees`]: list, fetch and register employees

pub mod employees;
