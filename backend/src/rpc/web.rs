use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use shared::RpcResponse;
use uuid::Uuid;

use super::{RpcContext, call_mutation, call_query, resolve};
use crate::models::AuthSession;
use crate::{Error, store::InvoiceStore};

/// The session is checked per call, so an anonymous caller gets the same JSON
/// envelope as any other failure.
pub fn router() -> Router {
    Router::new().route("/{procedure}", get(get::query).post(post::mutation))
}

fn respond(name: &str, result: Result<serde_json::Value, Error>) -> Response {
    match result {
        Ok(data) => (StatusCode::OK, Json(RpcResponse::Success { data })).into_response(),
        Err(e) => failure(name, e),
    }
}

fn failure(name: &str, e: Error) -> Response {
    let status = e.status();
    if status.is_server_error() {
        tracing::error!("Procedure {} failed: {}", name, e);
    } else {
        tracing::info!("Procedure {} rejected: {}", name, e);
    }
    (status, Json(RpcResponse::<()>::Failure(e.to_rpc_error()))).into_response()
}

fn session_context<S: InvoiceStore>(user_id: Option<Uuid>, store: S) -> Result<RpcContext<S>, Error> {
    user_id
        .map(|user_id| RpcContext::new(user_id, store))
        .ok_or(Error::Unauthorized)
}

async fn run_query<S: InvoiceStore>(
    user_id: Option<Uuid>,
    store: S,
    name: &str,
) -> Result<serde_json::Value, Error> {
    let ctx = session_context(user_id, store)?;
    call_query(&ctx, resolve(name)?).await
}

async fn run_mutation<S: InvoiceStore>(
    user_id: Option<Uuid>,
    store: S,
    name: &str,
    input: serde_json::Value,
) -> Result<serde_json::Value, Error> {
    let ctx = session_context(user_id, store)?;
    call_mutation(&ctx, resolve(name)?, input).await
}

pub async fn handle_query<S: InvoiceStore>(user_id: Option<Uuid>, store: S, name: &str) -> Response {
    respond(name, run_query(user_id, store, name).await)
}

pub async fn handle_mutation<S: InvoiceStore>(
    user_id: Option<Uuid>,
    store: S,
    name: &str,
    input: serde_json::Value,
) -> Response {
    respond(name, run_mutation(user_id, store, name, input).await)
}

mod get {
    use super::*;

    pub async fn query(auth: AuthSession, Path(name): Path<String>) -> Response {
        let user_id = auth.user.map(|user| user.id);
        handle_query(user_id, auth.backend, &name).await
    }
}

mod post {
    use super::*;

    pub async fn mutation(
        auth: AuthSession,
        Path(name): Path<String>,
        Json(input): Json<serde_json::Value>,
    ) -> Response {
        let user_id = auth.user.map(|user| user.id);
        handle_mutation(user_id, auth.backend, &name, input).await
    }
}
