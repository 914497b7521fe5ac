pub mod produk_id;
pub mod submitted_form;

pub use produk_id::ProdukId;
pub use submitted_form::SubmittedForm;
