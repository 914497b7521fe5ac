use askama::Template;
use axum::response::Html;

use crate::db::DbProduk;
use crate::error::CatalogError;
use crate::forms::BoundField;
use crate::urls;

/// Render a page into an axum HTML body.
pub fn render<T: Template>(page: &T) -> Result<Html<String>, CatalogError> {
    Ok(Html(page.render()?))
}

#[derive(Template)]
#[template(path = "produk_list.html")]
pub struct ProdukListTemplate<'a> {
    pub produks: &'a [DbProduk],
}

impl ProdukListTemplate<'_> {
    pub fn create_url(&self) -> &'static str {
        urls::PRODUK_CREATE
    }
}

/// Shared by create (`produk` is `None`) and update.
#[derive(Template)]
#[template(path = "produk_form.html")]
pub struct ProdukFormTemplate<'a> {
    pub produk: Option<&'a DbProduk>,
    pub fields: Vec<BoundField>,
}

impl ProdukFormTemplate<'_> {
    pub fn title(&self) -> &'static str {
        if self.produk.is_some() {
            "Edit Produk"
        } else {
            "Tambah Produk"
        }
    }

    pub fn action(&self) -> String {
        match self.produk {
            Some(produk) => produk.update_url(),
            None => urls::PRODUK_CREATE.to_string(),
        }
    }

    pub fn list_url(&self) -> &'static str {
        urls::PRODUK_LIST
    }
}

#[derive(Template)]
#[template(path = "produk_confirm_delete.html")]
pub struct ProdukConfirmDeleteTemplate<'a> {
    pub produk: &'a DbProduk,
}

impl ProdukConfirmDeleteTemplate<'_> {
    pub fn list_url(&self) -> &'static str {
        urls::PRODUK_LIST
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub message: String,
}

impl NotFoundTemplate {
    pub fn list_url(&self) -> &'static str {
        urls::PRODUK_LIST
    }
}
