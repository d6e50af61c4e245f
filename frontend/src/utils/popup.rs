use leptos::prelude::*;
use shared::page::ModalVisibility;
use stylance::classes;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PopupBackgroundStyle {
    Brightness,
    Blur,
}

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/utils/popup.module.css"
);

/// Visibility flag of a modal, handed to the overlay and whatever it hosts.
#[derive(Clone, Copy)]
pub struct ModalController {
    visibility: RwSignal<ModalVisibility>,
}

impl ModalController {
    pub fn provide() -> Self {
        let controller = Self {
            visibility: RwSignal::new(ModalVisibility::default()),
        };
        provide_context(controller);
        controller
    }

    pub fn expect() -> Self {
        expect_context::<ModalController>()
    }

    pub fn is_open(&self) -> bool {
        self.visibility.with(ModalVisibility::is_open)
    }

    pub fn open(&self) {
        self.visibility.update(ModalVisibility::open);
    }

    pub fn close(&self) {
        self.visibility.update(ModalVisibility::close);
    }

    /// Event handler that opens the modal, whatever the event.
    pub fn open_on<E: 'static>(self) -> impl Fn(E) + Copy + 'static {
        move |_: E| self.open()
    }

    /// Event handler that closes the modal, whatever the event.
    pub fn close_on<E: 'static>(self) -> impl Fn(E) + Copy + 'static {
        move |_: E| self.close()
    }
}

#[component]
pub fn Popup(
    children: ChildrenFn,
    #[prop(optional)] background_style: Option<PopupBackgroundStyle>,
    controller: ModalController,
) -> impl IntoView {
    let background = match background_style {
        Some(PopupBackgroundStyle::Blur) => Some(style::background_blur),
        Some(PopupBackgroundStyle::Brightness) => Some(style::background_brightness),
        None => None,
    };
    // children are only mounted while the modal is open
    view! {
        <Show when=move || controller.is_open()>
            <div
                class=classes!(style::overlay, background)
                on:click=controller.close_on()
            ></div>
            <div class=style::popup_content role="dialog" aria-modal="true">
                {children()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_popup(controller: ModalController) -> String {
        view! {
            <Popup controller=controller>
                <p>"Modal body"</p>
            </Popup>
        }
        .to_html()
    }

    #[test]
    fn test_closed_popup_mounts_nothing() {
        let owner = Owner::new_root(None);
        owner.with(|| {
            let controller = ModalController::provide();
            assert!(!controller.is_open());
            let html = render_popup(controller);
            assert!(!html.contains("Modal body"));
            assert!(!html.contains("dialog"));
        });
    }

    #[test]
    fn test_open_popup_mounts_children() {
        let owner = Owner::new_root(None);
        owner.with(|| {
            let controller = ModalController::provide();
            controller.open_on()(());
            assert!(controller.is_open());
            let html = render_popup(controller);
            assert!(html.contains("Modal body"));
            assert!(html.contains(r#"role="dialog""#));
        });
    }

    #[test]
    fn test_overlay_and_discard_handlers_close() {
        let owner = Owner::new_root(None);
        owner.with(|| {
            let controller = ModalController::provide();
            let open = controller.open_on();
            let close = controller.close_on();

            open(());
            close(());
            assert!(!controller.is_open());
            assert!(!render_popup(controller).contains("Modal body"));

            // closing twice is harmless and opening again works
            close(());
            open(());
            assert!(controller.is_open());
            assert!(ModalController::expect().is_open());
        });
    }
}
