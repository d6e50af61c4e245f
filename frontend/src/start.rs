use leptos::{
    logging::{error, log},
    prelude::*,
};
use shared::{DehydratedState, STATE_SCRIPT_ID};
use wasm_bindgen::{JsCast, prelude::*};

use crate::{APP_ROOT_ID, InvoicesApp, QueryClient};

/// Takes over the server-rendered page. The prefetched snapshot seeds the
/// query cache, so the first client render matches the server markup.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = document();
    let Some(script) = document.get_element_by_id(STATE_SCRIPT_ID) else {
        log!("No prefetched state on this page");
        return;
    };
    let state = DehydratedState::from_script_json(&script.text_content().unwrap_or_default())
        .unwrap_or_else(|e| {
            error!("Failed to read prefetched state: {}", e);
            DehydratedState::default()
        });

    let Some(root) = document.get_element_by_id(APP_ROOT_ID) else {
        error!("Missing #{} element", APP_ROOT_ID);
        return;
    };
    let root: web_sys::HtmlElement = root.unchecked_into();
    root.set_inner_html("");

    leptos::mount::mount_to(root, move || {
        let client = QueryClient::from_snapshot(&state);
        view! { <InvoicesApp client=client /> }
    })
    .forget();
}
