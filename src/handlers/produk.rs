use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::info;

use crate::forms::ProdukForm;
use crate::middleware::{ProdukId, SubmittedForm};
use crate::templates::{
    ProdukConfirmDeleteTemplate, ProdukFormTemplate, ProdukListTemplate, render,
};
use crate::{CatalogError, db::DbProduk, router::CatalogState, urls};

/// GET / -> all records.
pub async fn produk_list(State(state): State<CatalogState>) -> Result<Html<String>, CatalogError> {
    let produks = state.storage.list().await?;
    render(&ProdukListTemplate { produks: &produks })
}

/// GET /add -> empty form.
pub async fn produk_create_form() -> Result<Html<String>, CatalogError> {
    render_form(None, &ProdukForm::unbound())
}

/// POST /add -> insert and redirect, or redisplay with errors.
pub async fn produk_create(
    State(state): State<CatalogState>,
    SubmittedForm(data): SubmittedForm,
) -> Result<Response, CatalogError> {
    match ProdukForm::bind(data).clean() {
        Ok(draft) => {
            let id = state.storage.insert(&draft).await?;
            info!(id, nama = %draft.nama, "produk created");
            Ok(Redirect::to(urls::PRODUK_LIST).into_response())
        }
        Err(form) => Ok(render_form(None, &form)?.into_response()),
    }
}

/// GET /{id}/edit -> form pre-filled with the record.
pub async fn produk_update_form(
    State(state): State<CatalogState>,
    ProdukId(id): ProdukId,
) -> Result<Html<String>, CatalogError> {
    let produk = state.storage.get_by_id(id).await?;
    render_form(Some(&produk), &ProdukForm::from_produk(&produk))
}

/// POST /{id}/edit -> update and redirect, or redisplay with errors.
/// A missing record is 404 whatever the body holds.
pub async fn produk_update(
    State(state): State<CatalogState>,
    ProdukId(id): ProdukId,
    SubmittedForm(data): SubmittedForm,
) -> Result<Response, CatalogError> {
    let produk = state.storage.get_by_id(id).await?;
    match ProdukForm::bind(data).clean() {
        Ok(draft) => {
            state.storage.update_by_id(id, &draft).await?;
            info!(id, nama = %draft.nama, "produk updated");
            Ok(Redirect::to(urls::PRODUK_LIST).into_response())
        }
        Err(form) => Ok(render_form(Some(&produk), &form)?.into_response()),
    }
}

/// GET /{id}/delete -> confirmation prompt.
pub async fn produk_delete_confirm(
    State(state): State<CatalogState>,
    ProdukId(id): ProdukId,
) -> Result<Html<String>, CatalogError> {
    let produk = state.storage.get_by_id(id).await?;
    render(&ProdukConfirmDeleteTemplate { produk: &produk })
}

/// POST /{id}/delete -> remove and redirect.
pub async fn produk_delete(
    State(state): State<CatalogState>,
    ProdukId(id): ProdukId,
) -> Result<Response, CatalogError> {
    state.storage.delete_by_id(id).await?;
    info!(id, "produk deleted");
    Ok(Redirect::to(urls::PRODUK_LIST).into_response())
}

/// Fallback for paths outside the route table.
pub async fn page_not_found() -> CatalogError {
    CatalogError::PageNotFound
}

fn render_form(produk: Option<&DbProduk>, form: &ProdukForm) -> Result<Html<String>, CatalogError> {
    render(&ProdukFormTemplate {
        produk,
        fields: form.fields(),
    })
}
