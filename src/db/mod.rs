//! Database module: the storage accessor for student records.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `actor.rs`: the actor owning the connection pool, plus its handle
//! - `repository.rs`: the trait the service layer depends on

pub mod actor;
pub mod models;
pub mod repository;
pub mod schema;

pub use models::DbStudent;
pub use repository::StudentRepository;
pub use schema::SQLITE_INIT;

pub use actor::{DbActorHandle, spawn};
