pub mod popup;

use shared::{models::ThemePreference, page::OnceEffect};

pub use popup::{ModalController, Popup, PopupBackgroundStyle};

#[cfg(feature = "csr")]
pub struct BodyClassList(web_sys::DomTokenList);

#[cfg(feature = "csr")]
impl BodyClassList {
    pub fn current() -> Option<Self> {
        leptos::prelude::document()
            .body()
            .map(|body| Self(body.class_list()))
    }
}

#[cfg(feature = "csr")]
impl shared::page::ClassList for BodyClassList {
    fn add_class(&mut self, class: &str) {
        if let Err(e) = self.0.add_1(class) {
            leptos::logging::error!("Failed to add class {}: {:?}", class, e);
        }
    }
}

/// Adds the dark class to `<body>` the first time a preference resolves.
/// The server already rendered the class, so there is nothing to do there.
pub fn apply_body_dark_mode(gate: &mut OnceEffect, theme: Option<&ThemePreference>) {
    #[cfg(feature = "csr")]
    if let Some(mut body) = BodyClassList::current() {
        shared::page::apply_dark_mode(gate, theme, &mut body);
    }
    #[cfg(not(feature = "csr"))]
    let _ = (gate, theme);
}
