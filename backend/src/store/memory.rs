use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use shared::models::{InvoiceSummary, NewInvoice, ThemePreference};
use uuid::Uuid;

use super::{InvoiceStore, generate_reference};
use crate::Error;

/// In-memory store that counts reads, for exercising the RPC layer.
#[derive(Clone, Default)]
pub struct MemoryStore {
    preferences: Arc<Mutex<Vec<(Uuid, ThemePreference)>>>,
    invoices: Arc<Mutex<Vec<(Uuid, InvoiceSummary)>>>,
    reads: Arc<AtomicUsize>,
    fail_theme: bool,
}

impl MemoryStore {
    pub fn with_theme(self, user_id: Uuid, theme: ThemePreference) -> Self {
        self.preferences.lock().unwrap().push((user_id, theme));
        self
    }

    pub fn with_invoice(self, user_id: Uuid, invoice: InvoiceSummary) -> Self {
        self.invoices.lock().unwrap().push((user_id, invoice));
        self
    }

    pub fn failing_theme(mut self) -> Self {
        self.fail_theme = true;
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InvoiceStore for MemoryStore {
    async fn theme_preference(&self, user_id: Uuid) -> Result<ThemePreference, Error> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_theme {
            return Err(Error::Database(diesel::result::Error::NotFound));
        }
        let preferences = self.preferences.lock().unwrap();
        Ok(preferences
            .iter()
            .find(|(id, _)| *id == user_id)
            .map(|(_, theme)| *theme)
            .unwrap_or_default())
    }

    async fn invoices_for_user(&self, user_id: Uuid) -> Result<Vec<InvoiceSummary>, Error> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let mut invoices: Vec<_> = self
            .invoices
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == user_id)
            .map(|(_, invoice)| invoice.clone())
            .collect();
        invoices.sort_by(|a, b| {
            (a.payment_due, &a.reference).cmp(&(b.payment_due, &b.reference))
        });
        Ok(invoices)
    }

    async fn create_invoice(
        &self,
        user_id: Uuid,
        invoice: NewInvoice,
    ) -> Result<InvoiceSummary, Error> {
        let created = InvoiceSummary {
            id: Uuid::new_v4(),
            reference: generate_reference(&mut rand::rng()),
            client_name: invoice.client_name,
            payment_due: invoice.payment_due,
            total_cents: invoice.total_cents,
            status: invoice.status,
        };
        self.invoices.lock().unwrap().push((user_id, created.clone()));
        Ok(created)
    }
}
