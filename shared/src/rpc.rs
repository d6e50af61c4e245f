//! Catalogue of the remote procedures the invoices page talks to, and the
//! JSON envelope they answer with. Server and client both go through these
//! names, so a prefetched result and a live query share one cache key.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

use crate::models::{InvoiceSummary, NewInvoice, ThemePreference};

pub const RPC_PREFIX: &str = "/api/rpc";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display,
)]
pub enum Procedure {
    #[strum(serialize = "user.getPrefTheme")]
    GetPrefTheme,
    #[strum(serialize = "invoice.getInvoices")]
    GetInvoices,
    #[strum(serialize = "invoice.create")]
    CreateInvoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    Query,
    Mutation,
}

impl Procedure {
    pub fn kind(&self) -> ProcedureKind {
        match self {
            Procedure::GetPrefTheme | Procedure::GetInvoices => ProcedureKind::Query,
            Procedure::CreateInvoice => ProcedureKind::Mutation,
        }
    }

    /// Dotted name, also used as the cache key of queries without input.
    pub fn path(&self) -> &'static str {
        self.into()
    }

    pub fn url(&self) -> String {
        format!("{}/{}", RPC_PREFIX, self.path())
    }
}

/// A read-only procedure with a typed result.
pub trait Query {
    type Output: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;
    const PROCEDURE: Procedure;

    fn key() -> &'static str {
        Self::PROCEDURE.path()
    }
}

/// A procedure that changes state.
pub trait Mutation {
    type Input: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;
    type Output: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;
    const PROCEDURE: Procedure;
}

pub struct PrefTheme;

impl Query for PrefTheme {
    type Output = ThemePreference;
    const PROCEDURE: Procedure = Procedure::GetPrefTheme;
}

pub struct Invoices;

impl Query for Invoices {
    type Output = Vec<InvoiceSummary>;
    const PROCEDURE: Procedure = Procedure::GetInvoices;
}

pub struct CreateInvoice;

impl Mutation for CreateInvoice {
    type Input = NewInvoice;
    type Output = InvoiceSummary;
    const PROCEDURE: Procedure = Procedure::CreateInvoice;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcErrorCode {
    BadRequest,
    Unauthorized,
    NotFound,
    MethodNotSupported,
    InternalServerError,
}

impl RpcErrorCode {
    pub fn http_status(&self) -> u16 {
        match self {
            RpcErrorCode::BadRequest => 400,
            RpcErrorCode::Unauthorized => 401,
            RpcErrorCode::NotFound => 404,
            RpcErrorCode::MethodNotSupported => 405,
            RpcErrorCode::InternalServerError => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct RpcError {
    pub code: RpcErrorCode,
    pub message: String,
}

impl RpcError {
    pub fn new(code: RpcErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// `{"result":{"data":...}}` or `{"error":{"code":...,"message":...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RpcResponse<T> {
    #[serde(rename = "result")]
    Success { data: T },
    #[serde(rename = "error")]
    Failure(RpcError),
}

impl<T> RpcResponse<T> {
    pub fn into_result(self) -> Result<T, RpcError> {
        match self {
            RpcResponse::Success { data } => Ok(data),
            RpcResponse::Failure(err) => Err(err),
        }
    }
}
