//! Database record models matching table schemas.
//!
//! These structs correspond directly to table rows. Repositories return them from queries and
//! accept the `*CreateDBRequest` types for inserts.
//!
//! Database models are distinct from API models ([`crate::api::models`]) so that the storage
//! and wire representations can evolve independently; conversions are implemented with `From`.

pub mod employees;
