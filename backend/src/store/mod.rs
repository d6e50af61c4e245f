//! Where the RPC procedures read and write their data.

#[cfg(test)]
pub mod memory;
mod postgres;

use async_trait::async_trait;
use shared::models::{InvoiceSummary, NewInvoice, ThemePreference};
use uuid::Uuid;

use crate::Error;

pub use postgres::generate_reference;

#[async_trait]
pub trait InvoiceStore: Clone + Send + Sync + 'static {
    /// Users without a stored preference get the default.
    async fn theme_preference(&self, user_id: Uuid) -> Result<ThemePreference, Error>;

    /// Ordered by payment due date, then reference.
    async fn invoices_for_user(&self, user_id: Uuid) -> Result<Vec<InvoiceSummary>, Error>;

    async fn create_invoice(
        &self,
        user_id: Uuid,
        invoice: NewInvoice,
    ) -> Result<InvoiceSummary, Error>;
}
