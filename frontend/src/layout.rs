use leptos::prelude::*;

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/layout.module.css"
);

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class=style::layout>
            <header class=style::sidebar>
                <a href="/invoice" class=style::logo>
                    <img src="/assets/logo.svg" alt="Invoices" />
                </a>
                <form method="post" action="/auth/logout">
                    <button type="submit" class=style::logout>
                        "Log out"
                    </button>
                </form>
            </header>
            <main class=style::content>{children()}</main>
        </div>
    }
}
