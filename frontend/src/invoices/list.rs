use leptos::prelude::*;
use shared::{
    models::InvoiceSummary,
    page::{InvoiceListState, StatusFilter, count_label},
};
use stylance::classes;

use super::{InvoiceRow, NoInvoices, style};

/// Counts the whole collection; the status filter only narrows the rows.
#[component]
pub fn InvoiceCount(#[prop(into)] invoices: Signal<Option<Vec<InvoiceSummary>>>) -> impl IntoView {
    let count = move || invoices.with(|list| count_label(list.as_ref().map_or(0, Vec::len)));
    view! { <span class=style::count>{count}</span> }
}

#[component]
pub fn InvoiceList(
    #[prop(into)] invoices: Signal<Option<Vec<InvoiceSummary>>>,
    #[prop(into)] filter: Signal<StatusFilter>,
    #[prop(into)] refreshing: Signal<bool>,
) -> impl IntoView {
    let is_empty = move || {
        invoices.with(|list| InvoiceListState::from_collection(list.as_deref()).is_empty())
    };
    let visible_rows = move || {
        invoices.with(|list| {
            let list = list.as_deref().unwrap_or_default();
            filter.with(|f| f.apply(list).into_iter().cloned().collect::<Vec<_>>())
        })
    };
    let list_class = move || classes!(style::list, refreshing.get().then_some(style::refreshing));

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| {
                view! {
                    <div class=style::empty_container>
                        <NoInvoices />
                    </div>
                }
            }
        >
            <div class=list_class>
                <For
                    each=visible_rows
                    key=|invoice| invoice.id
                    children=move |invoice| view! { <InvoiceRow invoice=invoice /> }
                />
            </div>
        </Show>
    }
}
