#![recursion_limit = "256"]

mod app;
pub mod invoices;
mod landing;
mod layout;
pub mod query;
pub mod utils;

#[cfg(feature = "ssr")]
mod render;
#[cfg(feature = "csr")]
pub mod rpc;
#[cfg(feature = "csr")]
mod start;

pub use app::InvoicesApp;
pub use landing::LandingPage;
pub use query::QueryClient;
#[cfg(feature = "ssr")]
pub use render::{render_invoices_page, render_landing_page};

/// Element the client takes over after the server render.
pub const APP_ROOT_ID: &str = "app";
