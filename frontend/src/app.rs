use leptos::prelude::*;

use crate::{invoices::InvoicesPage, query::QueryClient};

#[component]
pub fn InvoicesApp(client: QueryClient) -> impl IntoView {
    provide_context(client);

    view! { <InvoicesPage /> }
}
