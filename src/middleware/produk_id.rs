use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::CatalogError;

/// The `{id}` path segment of `/{id}/edit` and `/{id}/delete`.
///
/// Only a positive decimal integer matches; anything else is treated as an unknown page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProdukId(pub i64);

impl ProdukId {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok().filter(|id: &i64| *id > 0).map(ProdukId)
    }
}

impl<S> FromRequestParts<S> for ProdukId
where
    S: Send + Sync,
{
    type Rejection = CatalogError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| CatalogError::PageNotFound)?;
        Self::parse(&raw).ok_or(CatalogError::PageNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_decimal_digits_parse() {
        assert_eq!(ProdukId::parse("7"), Some(ProdukId(7)));
        assert_eq!(ProdukId::parse("0"), None);
        assert_eq!(ProdukId::parse("000"), None);
        assert_eq!(ProdukId::parse("007"), Some(ProdukId(7)));
        assert_eq!(ProdukId::parse(""), None);
        assert_eq!(ProdukId::parse("-3"), None);
        assert_eq!(ProdukId::parse("+3"), None);
        assert_eq!(ProdukId::parse("abc"), None);
        assert_eq!(ProdukId::parse("99999999999999999999"), None);
    }
}
