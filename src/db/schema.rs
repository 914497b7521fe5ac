//! SQL DDL for initializing the Produk storage.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, so ids of deleted rows are never reused
/// - `harga` in whole rupiah
/// - `created_at` / `updated_at` as RFC3339 text
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS produk (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nama TEXT NOT NULL,
    harga INTEGER NOT NULL,
    stok INTEGER NOT NULL DEFAULT 0,
    deskripsi TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;
