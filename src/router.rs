use axum::{Router, routing::get};

use crate::db::ProdukStorage;
use crate::handlers::produk::{
    page_not_found, produk_create, produk_create_form, produk_delete, produk_delete_confirm,
    produk_list, produk_update, produk_update_form,
};
use crate::urls;

#[derive(Clone)]
pub struct CatalogState {
    pub storage: ProdukStorage,
}

impl CatalogState {
    pub fn new(storage: ProdukStorage) -> Self {
        Self { storage }
    }
}

/// `/` list, `/add` create, `/{id}/edit` update, `/{id}/delete` delete.
pub fn catalog_router(state: CatalogState) -> Router {
    Router::new()
        .route(urls::PRODUK_LIST, get(produk_list))
        .route(urls::PRODUK_CREATE, get(produk_create_form).post(produk_create))
        .route(urls::PRODUK_UPDATE, get(produk_update_form).post(produk_update))
        .route(urls::PRODUK_DELETE, get(produk_delete_confirm).post(produk_delete))
        .fallback(page_not_found)
        .with_state(state)
}
