use shared::models::{InvoiceSummary, NewInvoice};

use super::RpcContext;
use crate::{Error, store::InvoiceStore};

pub async fn get_invoices<S: InvoiceStore>(ctx: &RpcContext<S>) -> Result<Vec<InvoiceSummary>, Error> {
    let invoices = ctx.store.invoices_for_user(ctx.user_id).await?;
    tracing::debug!("Loaded {} invoices for user {}", invoices.len(), ctx.user_id);
    Ok(invoices)
}

pub async fn create_invoice<S: InvoiceStore>(
    ctx: &RpcContext<S>,
    invoice: NewInvoice,
) -> Result<InvoiceSummary, Error> {
    invoice.validate()?;
    let created = ctx.store.create_invoice(ctx.user_id, invoice).await?;
    tracing::info!("User {} created invoice {}", ctx.user_id, created.reference);
    Ok(created)
}
