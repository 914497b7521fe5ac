//! Database module: the Produk record, its schema and the storage handle.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and the validated write payload
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool setup and CRUD queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DbProduk, ProdukDraft};
pub use schema::SQLITE_INIT;
pub use sqlite::{ProdukStorage, SqlitePool, connect};
