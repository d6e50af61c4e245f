use async_trait::async_trait;
use diesel::{
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use rand::Rng;
use shared::{
    models::{InvoiceSummary, NewInvoice, ThemePreference},
    schema::{invoices, user_preferences},
};
use uuid::Uuid;

use super::InvoiceStore;
use crate::{Error, models::Backend};

const REFERENCE_ATTEMPTS: usize = 10;

/// Two uppercase letters followed by four digits, e.g. `RT3080`.
pub fn generate_reference<R: Rng>(rng: &mut R) -> String {
    let letters: String = (0..2)
        .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
        .collect();
    let digits: u16 = rng.random_range(0..10_000);
    format!("{letters}{digits:04}")
}

/// Runs `insert` with fresh references until one is not taken. The unique
/// constraint on `invoices.reference` is the arbiter, so concurrent creators
/// cannot both win with the same reference.
fn with_unique_reference<T, R: Rng>(
    rng: &mut R,
    mut insert: impl FnMut(&str) -> Result<T, DieselError>,
) -> Result<T, Error> {
    for _ in 0..REFERENCE_ATTEMPTS {
        let reference = generate_reference(rng);
        match insert(&reference) {
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                tracing::debug!("Reference {} taken, retrying", reference);
            }
            result => return Ok(result?),
        }
    }
    Err(Error::ReferenceGenerationFailed)
}

#[async_trait]
impl InvoiceStore for Backend {
    async fn theme_preference(&self, user_id: Uuid) -> Result<ThemePreference, Error> {
        let mut conn = self.get_connection()?;
        let preference = user_preferences::table
            .filter(user_preferences::user_id.eq(user_id))
            .select(ThemePreference::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(preference.unwrap_or_default())
    }

    async fn invoices_for_user(&self, user_id: Uuid) -> Result<Vec<InvoiceSummary>, Error> {
        let mut conn = self.get_connection()?;
        let invoices = invoices::table
            .filter(invoices::user_id.eq(user_id))
            .order((invoices::payment_due.asc(), invoices::reference.asc()))
            .select(InvoiceSummary::as_select())
            .load(&mut conn)?;
        Ok(invoices)
    }

    async fn create_invoice(
        &self,
        user_id: Uuid,
        invoice: NewInvoice,
    ) -> Result<InvoiceSummary, Error> {
        let mut conn = self.get_connection()?;
        let created = with_unique_reference(&mut rand::rng(), |reference| {
            diesel::insert_into(invoices::table)
                .values((
                    invoices::user_id.eq(user_id),
                    invoices::reference.eq(reference),
                    invoices::client_name.eq(&invoice.client_name),
                    invoices::client_email.eq(&invoice.client_email),
                    invoices::description.eq(&invoice.description),
                    invoices::payment_due.eq(invoice.payment_due),
                    invoices::total_cents.eq(invoice.total_cents),
                    invoices::status.eq(invoice.status),
                ))
                .returning(InvoiceSummary::as_returning())
                .get_result(&mut conn)
        })?;
        Ok(created)
    }
}
