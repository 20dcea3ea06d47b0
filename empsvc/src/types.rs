//! Common type definitions.
//!
//! Employee identifiers are plain integers assigned by the store (an identity column in
//! PostgreSQL, a counter in memory). The alias keeps signatures readable and gives one place
//! to change the representation.

pub type EmployeeId = i32;
