use leptos::prelude::*;

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/landing.module.css"
);

#[component]
pub fn LandingPage(error: Option<String>) -> impl IntoView {
    view! {
        <section class=style::landing>
            <h1 class=style::title>"Invoices"</h1>
            <p>"Sign in to manage your invoices."</p>
            {error.map(|error| view! { <p class=style::error role="alert">{error}</p> })}
            <form method="post" action="/auth/login" class=style::login_form>
                <label>"Username" <input type="text" name="username" required /></label>
                <label>"Password" <input type="password" name="password" required /></label>
                <button type="submit">"Sign in"</button>
            </form>
        </section>
    }
}
