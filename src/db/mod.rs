//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and query results
//! - `batch.rs`: write payloads for the seed/replace operation
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)

pub mod actor;
pub mod batch;
pub mod models;
pub mod schema;

pub use batch::{NewOwner, NewPet, SeedBatch};
pub use models::{DbOwner, DbPet, OwnerWithPets, PetDetail};
pub use schema::SQLITE_INIT;

pub use actor::{DbHandle, spawn};
