//! HTTP API layer.
//!
//! - [`handlers`]: route handlers
//! - [`models`]: request/response types and their validation rules

pub mod handlers;
pub mod models;
