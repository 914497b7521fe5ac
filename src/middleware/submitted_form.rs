use std::collections::HashMap;
use std::convert::Infallible;

use axum::Form;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use tracing::debug;

/// Submitted form fields, from a urlencoded or a `multipart/form-data` body.
///
/// Never rejects: a missing or unreadable body is an empty submission, so handlers still
/// run their own not-found checks and the form reports the missing fields.
#[derive(Debug, Clone, Default)]
pub struct SubmittedForm(pub HashMap<String, String>);

impl<S> FromRequest<S> for SubmittedForm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        let fields = if is_multipart {
            read_multipart(req, state).await
        } else {
            match Form::<HashMap<String, String>>::from_request(req, state).await {
                Ok(Form(fields)) => Some(fields),
                Err(rejection) => {
                    debug!(error = %rejection, "form body not readable; treating as empty");
                    None
                }
            }
        };

        Ok(SubmittedForm(fields.unwrap_or_default()))
    }
}

async fn read_multipart<S>(req: Request, state: &S) -> Option<HashMap<String, String>>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state)
        .await
        .inspect_err(|e| debug!(error = %e, "multipart body not readable"))
        .ok()?;

    let mut fields = HashMap::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                debug!(error = %e, "malformed multipart field");
                return None;
            }
        };
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        // File parts are not part of the Produk form; their bytes are skipped.
        if field.file_name().is_some() {
            continue;
        }
        match field.text().await {
            Ok(value) => {
                fields.insert(name, value);
            }
            Err(e) => {
                debug!(field = %name, error = %e, "multipart field not text");
                return None;
            }
        }
    }
    Some(fields)
}
