use std::process;

use axum_server::tls_rustls::RustlsConfig;
use backend::{Config, Error, create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("Server stopped: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let app = create_router(&config).await?;

    match &config.tls {
        Some(tls) => {
            if rustls::crypto::aws_lc_rs::default_provider()
                .install_default()
                .is_err()
            {
                tracing::warn!("A rustls crypto provider was already installed");
            }
            let rustls_config = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path).await?;
            tracing::info!("listening on https://{}", config.bind_addr);
            axum_server::bind_rustls(config.bind_addr, rustls_config)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            tracing::info!("listening on http://{}", config.bind_addr);
            axum_server::bind(config.bind_addr)
                .serve(app.into_make_service())
                .await?;
        }
    }
    Ok(())
}
