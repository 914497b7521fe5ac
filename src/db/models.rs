use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::urls;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbProduk {
    pub id: i64,
    pub nama: String,
    pub harga: i64,
    pub stok: i64,
    pub deskripsi: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbProduk {
    /// Price formatted as rupiah with `.` thousands separators, e.g. `Rp 15.000`.
    pub fn harga_display(&self) -> String {
        let digits = self.harga.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        let sign = if self.harga < 0 { "-" } else { "" };
        format!("Rp {sign}{grouped}")
    }

    pub fn update_url(&self) -> String {
        urls::produk_update(self.id)
    }

    pub fn delete_url(&self) -> String {
        urls::produk_delete(self.id)
    }

    pub fn updated_display(&self) -> String {
        self.updated_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Field values for an insert or update; the column constraints live here.
/// Produced by `ProdukForm::clean`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProdukDraft {
    #[validate(length(min = 1, max = 100))]
    pub nama: String,
    #[validate(range(min = 0))]
    pub harga: i64,
    #[validate(range(min = 0))]
    pub stok: i64,
    pub deskripsi: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn produk_with_harga(harga: i64) -> DbProduk {
        let now = Utc::now();
        DbProduk {
            id: 1,
            nama: "Kopi".to_string(),
            harga,
            stok: 1,
            deskripsi: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn harga_display_groups_thousands() {
        assert_eq!(produk_with_harga(0).harga_display(), "Rp 0");
        assert_eq!(produk_with_harga(950).harga_display(), "Rp 950");
        assert_eq!(produk_with_harga(15000).harga_display(), "Rp 15.000");
        assert_eq!(produk_with_harga(1234567).harga_display(), "Rp 1.234.567");
    }
}
