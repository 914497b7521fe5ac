use crate::db::models::{DbProduk, ProdukDraft};
use crate::db::schema::SQLITE_INIT;
use crate::error::CatalogError;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

const SELECT_COLUMNS: &str =
    "SELECT id, nama, harga, stok, deskripsi, created_at, updated_at FROM produk";

/// Open a pool for `database_url` (creating the file when missing) and initialize the schema.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
) -> Result<ProdukStorage, CatalogError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(max_connections);
    // Every connection to `sqlite::memory:` gets its own database; keep the single one alive.
    if database_url.contains(":memory:") {
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;
    let storage = ProdukStorage::new(pool);
    storage.init_schema().await?;
    info!(database_url = %database_url, "produk storage ready");
    Ok(storage)
}

#[derive(Clone)]
pub struct ProdukStorage {
    pool: SqlitePool,
}

impl ProdukStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), CatalogError> {
        // sqlx::query runs a single statement; split the bundle.
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<DbProduk>, CatalogError> {
        let rows = sqlx::query_as::<_, DbProduk>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find(&self, id: i64) -> Result<Option<DbProduk>, CatalogError> {
        let row = sqlx::query_as::<_, DbProduk>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Like `find`, but a missing row is `CatalogError::ProdukNotFound`.
    pub async fn get_by_id(&self, id: i64) -> Result<DbProduk, CatalogError> {
        self.find(id).await?.ok_or(CatalogError::ProdukNotFound(id))
    }

    /// Insert a new row. Returns the assigned id.
    pub async fn insert(&self, draft: &ProdukDraft) -> Result<i64, CatalogError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"INSERT INTO produk (nama, harga, stok, deskripsi, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&draft.nama)
        .bind(draft.harga)
        .bind(draft.stok)
        .bind(&draft.deskripsi)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite every editable field of row `id` and bump `updated_at`.
    pub async fn update_by_id(&self, id: i64, draft: &ProdukDraft) -> Result<(), CatalogError> {
        let result = sqlx::query(
            r#"UPDATE produk SET
                nama = ?,
                harga = ?,
                stok = ?,
                deskripsi = ?,
                updated_at = ?
              WHERE id = ?"#,
        )
        .bind(&draft.nama)
        .bind(draft.harga)
        .bind(draft.stok)
        .bind(&draft.deskripsi)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::ProdukNotFound(id));
        }
        Ok(())
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), CatalogError> {
        let result = sqlx::query("DELETE FROM produk WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::ProdukNotFound(id));
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, CatalogError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM produk")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_storage() -> ProdukStorage {
        connect("sqlite::memory:", 1)
            .await
            .expect("in-memory storage")
    }

    fn draft(nama: &str, harga: i64) -> ProdukDraft {
        ProdukDraft {
            nama: nama.to_string(),
            harga,
            stok: 10,
            deskripsi: format!("{nama} pilihan"),
        }
    }

    #[tokio::test]
    async fn insert_then_get_by_id() {
        let storage = memory_storage().await;
        let id = storage.insert(&draft("Teh", 5000)).await.expect("insert");

        let row = storage.get_by_id(id).await.expect("get");
        assert_eq!(row.id, id);
        assert_eq!(row.nama, "Teh");
        assert_eq!(row.harga, 5000);
        assert_eq!(row.deskripsi, "Teh pilihan");
        assert_eq!(row.created_at, row.updated_at);
        assert_eq!(storage.count().await.expect("count"), 1);
    }

    #[tokio::test]
    async fn update_touches_only_the_target_row() {
        let storage = memory_storage().await;
        let a = storage.insert(&draft("Gula", 12000)).await.expect("insert a");
        let b = storage.insert(&draft("Garam", 3000)).await.expect("insert b");
        let before_b = storage.get_by_id(b).await.expect("get b");

        storage
            .update_by_id(a, &draft("Gula Aren", 18000))
            .await
            .expect("update");

        let after_a = storage.get_by_id(a).await.expect("get a");
        assert_eq!(after_a.nama, "Gula Aren");
        assert_eq!(after_a.harga, 18000);
        assert!(after_a.updated_at >= after_a.created_at);
        assert_eq!(storage.get_by_id(b).await.expect("get b"), before_b);
    }

    #[tokio::test]
    async fn missing_rows_report_not_found() {
        let storage = memory_storage().await;

        assert!(storage.find(42).await.expect("find").is_none());
        assert!(matches!(
            storage.get_by_id(42).await,
            Err(CatalogError::ProdukNotFound(42))
        ));
        assert!(matches!(
            storage.update_by_id(42, &draft("X", 1)).await,
            Err(CatalogError::ProdukNotFound(42))
        ));
        assert!(matches!(
            storage.delete_by_id(42).await,
            Err(CatalogError::ProdukNotFound(42))
        ));
        assert_eq!(storage.count().await.expect("count"), 0);
    }

    #[tokio::test]
    async fn list_reflects_creates_minus_deletes() {
        let storage = memory_storage().await;
        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(
                storage
                    .insert(&draft(&format!("Produk {i}"), 1000 * i))
                    .await
                    .expect("insert"),
            );
        }
        storage.delete_by_id(ids[1]).await.expect("delete");
        storage.delete_by_id(ids[3]).await.expect("delete");

        let listed = storage.list().await.expect("list");
        let listed_ids: Vec<i64> = listed.iter().map(|p| p.id).collect();
        assert_eq!(listed_ids, vec![ids[0], ids[2], ids[4]]);
        assert!(storage.find(ids[1]).await.expect("find").is_none());
    }
}
