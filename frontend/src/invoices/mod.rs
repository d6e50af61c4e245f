mod create_invoice;
mod empty;
mod filter;
mod list;
mod row;

use leptos::prelude::*;
use shared::{
    page::{OnceEffect, StatusFilter},
    rpc::{Invoices, PrefTheme},
};

use crate::{
    layout::Layout,
    query::QueryClient,
    utils::{ModalController, Popup, PopupBackgroundStyle, apply_body_dark_mode},
};

pub use create_invoice::{CreateInvoiceForm, FormError, build_new_invoice};
pub use empty::NoInvoices;
pub use filter::Filter;
pub use list::{InvoiceCount, InvoiceList};
pub use row::InvoiceRow;

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/invoices/invoices.module.css"
);

#[component]
pub fn InvoicesPage() -> impl IntoView {
    let client = QueryClient::expect();
    let theme = client.query::<PrefTheme>();
    let invoices = client.query::<Invoices>();
    let modal = ModalController::provide();
    let filter = RwSignal::new(StatusFilter::default());

    let dark_mode_gate = StoredValue::new(OnceEffect::default());
    Effect::new(move |_| {
        let theme = theme.get();
        dark_mode_gate.update_value(|gate| apply_body_dark_mode(gate, theme.as_ref()));
    });

    let refreshing = Signal::derive(move || client.is_stale::<Invoices>());

    view! {
        <Layout>
            <Popup controller=modal background_style=PopupBackgroundStyle::Brightness>
                <CreateInvoiceForm />
            </Popup>

            <div class=style::page>
                <div class=style::header>
                    <div>
                        <h1 class=style::title>"Invoices"</h1>
                        <InvoiceCount invoices=invoices />
                    </div>
                    <div class=style::actions>
                        <Filter filter=filter />
                        <button class=style::new_button on:click=modal.open_on()>
                            <span class=style::plus_icon>
                                <img
                                    src="/assets/icon-plus.svg"
                                    width="10"
                                    height="10"
                                    alt="create new invoice"
                                />
                            </span>
                            <span>"New " <span class=style::wide_only>"Invoice"</span></span>
                        </button>
                    </div>
                </div>
                <InvoiceList invoices=invoices filter=filter refreshing=refreshing />
            </div>
        </Layout>
    }
}
