//! Repository implementations for database access.
//!
//! Each repository wraps a SQLx connection (or transaction), binds query parameters, and
//! returns models from [`crate::db::models`]. All repositories implement [`Repository`].
//!
//! # Usage
//!
//! ```ignore
//! use empsvc::db::handlers::{Employees, Repository};
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut conn = pool.acquire().await?;
//!     let mut repo = Employees::new(&mut conn);
//!
//!     let employees = repo.list().await?;
//!     Ok(())
//! }
//! ```

pub mod employees;
pub mod repository;

pub use employees::Employees;
pub use repository::Repository;
