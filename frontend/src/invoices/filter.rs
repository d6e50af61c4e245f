use leptos::prelude::*;
use shared::{models::InvoiceStatus, page::StatusFilter};
use strum::IntoEnumIterator;

use super::style;

#[component]
pub fn Filter(filter: RwSignal<StatusFilter>) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    view! {
        <div class=style::filter>
            <button
                type="button"
                class=style::filter_toggle
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| set_expanded.update(|e| *e = !*e)
            >
                "Filter"
                <span class=style::wide_only>" by status"</span>
            </button>
            <Show when=move || expanded.get()>
                <ul class=style::filter_menu>
                    {InvoiceStatus::iter()
                        .map(|status| {
                            view! {
                                <li>
                                    <label>
                                        <input
                                            type="checkbox"
                                            prop:checked=move || filter.with(|f| f.is_selected(status))
                                            on:change=move |_| filter.update(|f| f.toggle(status))
                                        />
                                        {status.label()}
                                    </label>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
