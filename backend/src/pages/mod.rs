mod invoices;
mod landing;

use axum::{Router, routing::get};

pub use invoices::{prefetch_invoices_page, render_invoices_response, require_user};

pub fn router() -> Router {
    Router::new()
        .route("/", get(landing::landing_page))
        .route("/invoice", get(invoices::invoices_page))
}
