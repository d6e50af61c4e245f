use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::models::AuthSession;

pub async fn landing_page(auth: AuthSession) -> Response {
    if auth.user.is_some() {
        return Redirect::temporary("/invoice").into_response();
    }
    Html(invoices_ui::render_landing_page(None)).into_response()
}
