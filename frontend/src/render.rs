use leptos::prelude::*;
use shared::{
    DehydratedState, STATE_SCRIPT_ID,
    page::body_class,
    rpc::{Invoices, PrefTheme},
};

use crate::{APP_ROOT_ID, InvoicesApp, LandingPage, QueryClient};

const CLIENT_BOOTSTRAP: &str =
    "import init from '/pkg/invoices_ui.js'; init({ module_or_path: '/pkg/invoices_ui_bg.wasm' });";

#[component]
fn Document(
    #[prop(into)] title: String,
    body_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content="Create and track invoices" />
                <link rel="icon" href="/assets/favicon.svg" />
                <link rel="stylesheet" href="/pkg/invoices.css" />
                <title>{title}</title>
            </head>
            <body class=body_class.unwrap_or_default()>{children()}</body>
        </html>
    }
}

/// Renders the invoices page from a prefetched snapshot. The snapshot is
/// embedded for the client to seed its query cache from.
pub fn render_invoices_page(state: &DehydratedState) -> Result<String, serde_json::Error> {
    let state_json = state.to_script_json()?;
    let theme = state.decode::<PrefTheme>()?;
    // a snapshot that does not decode is an error, never an empty list
    state.decode::<Invoices>()?;
    let body_class = body_class(theme.as_ref());

    let owner = Owner::new_root(None);
    Ok(owner.with(|| {
        let client = QueryClient::from_snapshot(state);
        view! {
            <Document title="Invoices" body_class=body_class>
                <div id=APP_ROOT_ID>
                    <InvoicesApp client=client />
                </div>
                <script id=STATE_SCRIPT_ID type="application/json" inner_html=state_json></script>
                <script type="module" inner_html=CLIENT_BOOTSTRAP></script>
            </Document>
        }
        .to_html()
    }))
}

pub fn render_landing_page(error: Option<String>) -> String {
    let owner = Owner::new_root(None);
    owner.with(|| {
        view! {
            <Document title="Invoices - Sign in" body_class=None>
                <LandingPage error=error />
            </Document>
        }
        .to_html()
    })
}
