use leptos::prelude::*;
use shared::page::EMPTY_TITLE;

use super::style;

#[component]
pub fn NoInvoices() -> impl IntoView {
    view! {
        <div class=style::empty>
            <div class=style::illustration>
                <img src="/assets/illustration-empty.svg" alt="" aria-hidden="true" />
            </div>
            <h2 class=style::empty_title>{EMPTY_TITLE}</h2>
            <p class=style::empty_hint>
                "Create an invoice by clicking the " <strong>"New"</strong>
                " button and get started"
            </p>
        </div>
    }
}
