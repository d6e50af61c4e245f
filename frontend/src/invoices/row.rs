use leptos::prelude::*;
use shared::models::{InvoiceStatus, InvoiceSummary};
use stylance::classes;

use super::style;

#[component]
pub fn InvoiceRow(invoice: InvoiceSummary) -> impl IntoView {
    let status_class = match invoice.status {
        InvoiceStatus::Draft => style::status_draft,
        InvoiceStatus::Pending => style::status_pending,
        InvoiceStatus::Paid => style::status_paid,
    };

    view! {
        <article class=style::row data-invoice-id=invoice.id.to_string()>
            <span class=style::reference>{invoice.display_reference()}</span>
            <span class=style::due>{invoice.due_label()}</span>
            <span class=style::client>{invoice.client_name.clone()}</span>
            <span class=style::total>{invoice.formatted_total()}</span>
            <span class=classes!(style::status, status_class)>{invoice.status.label()}</span>
        </article>
    }
}
