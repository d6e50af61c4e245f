use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::{
    Procedure, ProcedureKind, RpcError, RpcErrorCode, models::InvoiceValidationError,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("DBPool error: {0}")]
    R2D2(#[from] r2d2::Error),
    #[error("Session store error: {0}")]
    SessionStore(#[from] tower_sessions_sqlx_store::sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(String),
    #[error("Password hash error: {0}")]
    PasswordHash(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Not logged in")]
    Unauthorized,
    #[error("Unknown procedure: {0}")]
    UnknownProcedure(String),
    #[error("{procedure} cannot be called as a {expected:?}")]
    WrongProcedureKind {
        procedure: Procedure,
        expected: ProcedureKind,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid invoice: {0}")]
    InvalidInvoice(#[from] InvoiceValidationError),
    #[error("Could not generate a unique invoice reference")]
    ReferenceGenerationFailed,
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Error::PasswordHash(err.to_string())
    }
}

impl Error {
    pub fn code(&self) -> RpcErrorCode {
        match self {
            Error::Unauthorized => RpcErrorCode::Unauthorized,
            Error::UnknownProcedure(_) => RpcErrorCode::NotFound,
            Error::WrongProcedureKind { .. } => RpcErrorCode::MethodNotSupported,
            Error::InvalidInput(_) | Error::InvalidInvoice(_) => RpcErrorCode::BadRequest,
            _ => RpcErrorCode::InternalServerError,
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code().http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn to_rpc_error(&self) -> RpcError {
        RpcError::new(self.code(), self.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
