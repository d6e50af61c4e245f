use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::post;
use axum::{Form, Json};

use crate::models::{AuthSession, Credentials, Signup};

pub fn router() -> Router {
    Router::new()
        .route("/login", post(self::post::login))
        .route("/signup", post(self::post::signup))
        .route("/logout", post(self::post::logout))
}

fn landing_with_error(status: StatusCode, message: &str) -> Response {
    let html = invoices_ui::render_landing_page(Some(message.to_string()));
    (status, Html(html)).into_response()
}

mod post {
    use super::*;

    pub async fn login(mut auth: AuthSession, Form(credentials): Form<Credentials>) -> Response {
        let user = match auth.authenticate(credentials).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::info!("Failed to login user: Invalid credentials");
                return landing_with_error(StatusCode::UNAUTHORIZED, "Invalid credentials");
            }
            Err(e) => {
                tracing::error!("Failed to login user: {}", e);
                return landing_with_error(StatusCode::INTERNAL_SERVER_ERROR, "Login failed");
            }
        };
        match auth.login(&user).await {
            Ok(_) => {
                tracing::info!("User {} logged in", user.username);
                Redirect::to("/invoice").into_response()
            }
            Err(e) => {
                tracing::error!("Failed to login user {}: {}", user.username, e);
                landing_with_error(StatusCode::INTERNAL_SERVER_ERROR, "Login failed")
            }
        }
    }

    pub async fn signup(auth: AuthSession, Json(signup): Json<Signup>) -> impl IntoResponse {
        if signup.username.trim().is_empty() || signup.password.is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                "Username and password are required".to_string(),
            );
        }
        match auth.backend.check_username_exists(&signup.username) {
            Ok(true) => {
                tracing::info!("Failed to signup user: Username already exists");
                return (
                    StatusCode::BAD_REQUEST,
                    "Username already exists".to_string(),
                );
            }
            Ok(false) => {}
            Err(e) => {
                tracing::error!("Failed to check username existence: {}", e);
                return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
            }
        }
        match auth.backend.check_email_exists(&signup.email) {
            Ok(true) => {
                tracing::info!("Failed to signup user: Email already exists");
                return (StatusCode::BAD_REQUEST, "Email already exists".to_string());
            }
            Ok(false) => {}
            Err(e) => {
                tracing::error!("Failed to check email existence: {}", e);
                return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
            }
        }
        match auth.backend.create_user(signup) {
            Ok(user) => {
                tracing::info!("User {} signed up", user.username);
                (StatusCode::CREATED, "Signed up".to_string())
            }
            Err(e) => {
                tracing::error!("Failed to signup user: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }

    pub async fn logout(mut auth: AuthSession) -> Response {
        match auth.logout().await {
            Ok(Some(user)) => tracing::info!("User {} logged out", user.username),
            Ok(None) => tracing::debug!("Logout without a session"),
            Err(e) => {
                tracing::error!("Failed to logout: {}", e);
                return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
            }
        }
        Redirect::to("/").into_response()
    }
}
