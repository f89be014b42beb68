//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite table:
//! - productos(id, Nombre, Direccion1, Direccion2, Celular, Dinero)
//!
//! The column names are kept as-is so files written by earlier releases
//! open without migration.

pub mod schema;
pub mod sqlite;

pub use sqlite::RecordStore;
