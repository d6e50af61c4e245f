use chrono::NaiveDate;
use leptos::{ev::SubmitEvent, prelude::*};
use shared::models::{InvoiceStatus, InvoiceValidationError, NewInvoice, parse_amount};

use super::style;
use crate::{query::QueryClient, utils::ModalController};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Payment due must be a date (YYYY-MM-DD)")]
    InvalidDate,
    #[error(transparent)]
    Invoice(#[from] InvoiceValidationError),
}

/// Turns the raw form fields into a validated `invoice.create` payload.
pub fn build_new_invoice(
    client_name: &str,
    client_email: &str,
    description: &str,
    payment_due: &str,
    total: &str,
    status: InvoiceStatus,
) -> Result<NewInvoice, FormError> {
    let payment_due = NaiveDate::parse_from_str(payment_due.trim(), "%Y-%m-%d")
        .map_err(|_| FormError::InvalidDate)?;
    let invoice = NewInvoice {
        client_name: client_name.trim().to_string(),
        client_email: client_email.trim().to_string(),
        description: description.trim().to_string(),
        payment_due,
        total_cents: parse_amount(total)?,
        status,
    };
    invoice.validate()?;
    Ok(invoice)
}

#[component]
fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <label class=style::field>
            <span>{label}</span>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn CreateInvoiceForm() -> impl IntoView {
    let modal = ModalController::expect();
    let client = QueryClient::expect();

    let client_name = RwSignal::new(String::new());
    let client_email = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let payment_due = RwSignal::new(String::new());
    let total = RwSignal::new(String::new());
    let form_error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let submit = move |status: InvoiceStatus| {
        let payload = build_new_invoice(
            &client_name.get_untracked(),
            &client_email.get_untracked(),
            &description.get_untracked(),
            &payment_due.get_untracked(),
            &total.get_untracked(),
            status,
        );
        match payload {
            Ok(payload) => {
                form_error.set(None);
                submit_invoice(client, modal, payload, form_error, pending);
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };

    view! {
        <form
            class=style::form
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                submit(InvoiceStatus::Pending);
            }
        >
            <h2 class=style::form_title>"New Invoice"</h2>
            <TextField label="Client's Name" value=client_name />
            <TextField label="Client's Email" value=client_email input_type="email" />
            <TextField label="Project Description" value=description />
            <TextField label="Payment Due" value=payment_due input_type="date" />
            <TextField label="Total" value=total />
            <Show when=move || form_error.with(Option::is_some)>
                <p class=style::form_error role="alert">
                    {move || form_error.get().unwrap_or_default()}
                </p>
            </Show>
            <div class=style::form_actions>
                <button type="button" on:click=modal.close_on()>
                    "Discard"
                </button>
                <button
                    type="button"
                    disabled=move || pending.get()
                    on:click=move |_| submit(InvoiceStatus::Draft)
                >
                    "Save as Draft"
                </button>
                <button type="submit" disabled=move || pending.get()>
                    "Save & Send"
                </button>
            </div>
        </form>
    }
}

fn submit_invoice(
    client: QueryClient,
    modal: ModalController,
    payload: NewInvoice,
    form_error: RwSignal<Option<String>>,
    pending: RwSignal<bool>,
) {
    #[cfg(feature = "csr")]
    {
        use leptos::{
            logging::{error, log},
            task::spawn_local,
        };
        use shared::rpc::{CreateInvoice, Invoices};

        pending.set(true);
        spawn_local(async move {
            match crate::rpc::call_mutation::<CreateInvoice>(&payload).await {
                Ok(created) => {
                    log!("Created invoice {}", created.reference);
                    client.invalidate::<Invoices>();
                    modal.close();
                }
                Err(e) => {
                    error!("Failed to create invoice: {}", e);
                    form_error.set(Some(e.to_string()));
                }
            }
            pending.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (client, modal, payload, form_error, pending);
}
