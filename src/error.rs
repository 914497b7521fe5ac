use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::templates::NotFoundTemplate;

#[derive(Debug, ThisError)]
pub enum CatalogError {
    #[error("Produk {0} not found")]
    ProdukNotFound(i64),

    #[error("Page not found")]
    PageNotFound,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub fn status(&self) -> StatusCode {
        match self {
            CatalogError::ProdukNotFound(_) | CatalogError::PageNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status == StatusCode::NOT_FOUND {
            let page = NotFoundTemplate {
                message: self.to_string(),
            };
            return match page.render() {
                Ok(html) => (status, Html(html)).into_response(),
                Err(e) => {
                    error!(error = %e, "failed to render not-found page");
                    (status, "Not Found").into_response()
                }
            };
        }

        error!(error = %self, "request failed");
        (
            status,
            Html("<h1>Server Error (500)</h1><p>An internal server error occurred.</p>"),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_failures_convert_and_map_to_server_error() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("MAX_CONNECTIONS", "plenty");
            let err: CatalogError = crate::config::Config::from_env()
                .expect_err("non-numeric MAX_CONNECTIONS")
                .into();
            assert!(matches!(err, CatalogError::Config(_)));
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
            Ok(())
        });

        let err: CatalogError = std::io::Error::from(std::io::ErrorKind::AddrInUse).into();
        assert!(matches!(err, CatalogError::Io(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_variants_map_to_404() {
        assert_eq!(
            CatalogError::ProdukNotFound(3).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(CatalogError::PageNotFound.status(), StatusCode::NOT_FOUND);
        let resp = CatalogError::ProdukNotFound(3).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
