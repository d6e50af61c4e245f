//! Named procedures behind `/api/rpc`, callable over HTTP by the client and
//! in-process by the page prefetcher.

mod invoice;
mod ssg;
mod user;
pub mod web;

use shared::{Procedure, ProcedureKind, models::NewInvoice};
use uuid::Uuid;

use crate::{Error, store::InvoiceStore};

pub use ssg::SsgHelpers;

/// Request-scoped execution context: who is asking and where data lives.
#[derive(Clone)]
pub struct RpcContext<S> {
    pub user_id: Uuid,
    pub store: S,
}

impl<S: InvoiceStore> RpcContext<S> {
    pub fn new(user_id: Uuid, store: S) -> Self {
        Self { user_id, store }
    }
}

pub fn resolve(name: &str) -> Result<Procedure, Error> {
    name.parse()
        .map_err(|_| Error::UnknownProcedure(name.to_string()))
}

fn expect_kind(procedure: Procedure, expected: ProcedureKind) -> Result<(), Error> {
    if procedure.kind() == expected {
        Ok(())
    } else {
        Err(Error::WrongProcedureKind {
            procedure,
            expected,
        })
    }
}

async fn dispatch<S: InvoiceStore>(
    ctx: &RpcContext<S>,
    procedure: Procedure,
    input: serde_json::Value,
) -> Result<serde_json::Value, Error> {
    match procedure {
        Procedure::GetPrefTheme => Ok(serde_json::to_value(user::get_pref_theme(ctx).await?)?),
        Procedure::GetInvoices => Ok(serde_json::to_value(invoice::get_invoices(ctx).await?)?),
        Procedure::CreateInvoice => {
            let input: NewInvoice =
                serde_json::from_value(input).map_err(|e| Error::InvalidInput(e.to_string()))?;
            Ok(serde_json::to_value(invoice::create_invoice(ctx, input).await?)?)
        }
    }
}

pub async fn call_query<S: InvoiceStore>(
    ctx: &RpcContext<S>,
    procedure: Procedure,
) -> Result<serde_json::Value, Error> {
    expect_kind(procedure, ProcedureKind::Query)?;
    dispatch(ctx, procedure, serde_json::Value::Null).await
}

pub async fn call_mutation<S: InvoiceStore>(
    ctx: &RpcContext<S>,
    procedure: Procedure,
    input: serde_json::Value,
) -> Result<serde_json::Value, Error> {
    expect_kind(procedure, ProcedureKind::Mutation)?;
    dispatch(ctx, procedure, input).await
}
