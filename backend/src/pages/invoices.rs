use axum::response::{Html, IntoResponse, Redirect, Response};
use shared::{
    DehydratedState,
    rpc::{Invoices, PrefTheme},
};
use uuid::Uuid;

use crate::{
    Error,
    models::AuthSession,
    rpc::{RpcContext, SsgHelpers},
    store::InvoiceStore,
};

/// Without a user the page is not rendered; the visitor goes back to the
/// landing page with a temporary redirect.
pub fn require_user<U>(user: Option<U>) -> Result<U, Redirect> {
    user.ok_or_else(|| Redirect::temporary("/"))
}

pub async fn prefetch_invoices_page<S: InvoiceStore>(
    ctx: &RpcContext<S>,
) -> Result<DehydratedState, Error> {
    let mut ssg = SsgHelpers::new(ctx);
    ssg.prefetch::<PrefTheme>().await?;
    ssg.prefetch::<Invoices>().await?;
    Ok(ssg.dehydrate())
}

/// Guard, prefetch, render. A failing prefetch fails the whole page.
pub async fn render_invoices_response<S: InvoiceStore>(
    user_id: Option<Uuid>,
    store: S,
) -> Result<Response, Error> {
    let user_id = match require_user(user_id) {
        Ok(user_id) => user_id,
        Err(redirect) => {
            tracing::info!("No session, redirecting to the landing page");
            return Ok(redirect.into_response());
        }
    };
    let ctx = RpcContext::new(user_id, store);
    let state = prefetch_invoices_page(&ctx).await?;
    let html = invoices_ui::render_invoices_page(&state)?;
    Ok(Html(html).into_response())
}

pub async fn invoices_page(auth: AuthSession) -> Response {
    let user_id = auth.user.map(|user| user.id);
    match render_invoices_response(user_id, auth.backend).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Failed to render invoices page: {}", e);
            e.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::to_bytes,
        http::{StatusCode, header::LOCATION},
    };
    use chrono::NaiveDate;
    use shared::{
        Query,
        models::{InvoiceStatus, InvoiceSummary, ThemePreference},
    };

    use super::*;
    use crate::store::memory::MemoryStore;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn invoice(reference: &str, client_name: &str) -> InvoiceSummary {
        InvoiceSummary {
            id: Uuid::new_v4(),
            reference: reference.to_string(),
            client_name: client_name.to_string(),
            payment_due: NaiveDate::from_ymd_opt(2021, 8, 19).unwrap(),
            total_cents: 180_090,
            status: InvoiceStatus::Paid,
        }
    }

    #[test]
    fn test_require_user() {
        assert_eq!(require_user(Some(7)).unwrap(), 7);
        let response = require_user::<u32>(None).unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[LOCATION], "/");
    }

    #[tokio::test]
    async fn test_no_session_redirects_without_prefetching() {
        let store = MemoryStore::default();
        let response = render_invoices_response(None, store.clone()).await.unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[LOCATION], "/");
        assert_eq!(store.reads(), 0);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_dark_theme_and_no_invoices() {
        let user_id = Uuid::new_v4();
        let store = MemoryStore::default().with_theme(user_id, ThemePreference { dark_mode: true });
        let response = render_invoices_response(Some(user_id), store.clone()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.reads(), 2);
        let html = body_text(response).await;
        assert!(html.contains(r#"class="dark""#));
        assert!(html.contains("/assets/illustration-empty.svg"));
        assert!(html.contains("There is nothing here"));
        assert!(html.contains("No invoices"));
        assert!(html.contains(shared::STATE_SCRIPT_ID));
    }

    #[tokio::test]
    async fn test_invoices_are_listed() {
        let user_id = Uuid::new_v4();
        let store = MemoryStore::default()
            .with_invoice(user_id, invoice("RT3080", "Jensen Huang"))
            .with_invoice(user_id, invoice("XM9141", "Alex Grim"));
        let response = render_invoices_response(Some(user_id), store).await.unwrap();

        let html = body_text(response).await;
        assert!(html.contains("2 Invoices"));
        assert!(html.contains("#RT3080"));
        assert!(html.contains("Alex Grim"));
        assert!(!html.contains("There is nothing here"));
        assert!(!html.contains(r#"class="dark""#));
        // the creation form only mounts once the modal opens
        assert!(!html.contains("Save as Draft"));
        assert!(!html.contains(r#"role="dialog""#));
        assert!(html.contains("create new invoice"));
    }

    #[test]
    fn test_undecodable_snapshot_is_an_error() {
        let mut state = DehydratedState::default();
        let now = chrono::Utc::now();
        state.insert(PrefTheme::key(), serde_json::json!({"darkMode": false}), now);
        state.insert(Invoices::key(), serde_json::json!([{"id": "nope"}]), now);

        assert!(invoices_ui::render_invoices_page(&state).is_err());
    }

    #[tokio::test]
    async fn test_prefetch_failure_fails_the_page() {
        let store = MemoryStore::default().failing_theme();
        let result = render_invoices_response(Some(Uuid::new_v4()), store.clone()).await;

        let err = result.unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.reads(), 1);
    }

    #[tokio::test]
    async fn test_snapshot_matches_rendered_data() {
        let user_id = Uuid::new_v4();
        let store = MemoryStore::default().with_invoice(user_id, invoice("FV2353", "Anita Wainwright"));
        let ctx = RpcContext::new(user_id, store);
        let state = prefetch_invoices_page(&ctx).await.unwrap();

        let invoices = state.decode::<Invoices>().unwrap().unwrap();
        assert_eq!(invoices.len(), 1);
        assert_eq!(state.decode::<PrefTheme>().unwrap(), Some(ThemePreference::default()));
    }
}
