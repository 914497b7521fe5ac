pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod templates;
pub mod urls;

pub use error::CatalogError;
pub use router::{CatalogState, catalog_router};
