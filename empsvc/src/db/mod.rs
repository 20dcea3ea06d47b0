//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL, following the
//! repository pattern.
//!
//! ```text
//! ┌─────────────┐
//! │   Gateway   │  (crate::gateway - store abstraction used by handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! # Migrations
//!
//! Migrations live in the crate's `migrations/` directory and are embedded at compile time.
//! They run on startup through [`crate::migrator`]:
//!
//! ```ignore
//! empsvc::migrator().run(&pool).await?;
//! ```

pub mod errors;
pub mod handlers;
pub mod models;
