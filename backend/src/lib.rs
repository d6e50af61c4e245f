pub mod auth;
pub mod config;
pub mod models;
pub mod pages;
pub mod rpc;
pub mod store;
pub mod utils;

use axum::Router;
use axum_login::{
    AuthManagerLayerBuilder,
    tower_sessions::{self, MemoryStore, SessionManagerLayer},
};
use diesel::{PgConnection, r2d2::ConnectionManager};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use r2d2::Pool;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions_sqlx_store::{PostgresStore, sqlx::PgPool};

pub use config::Config;
pub use utils::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Connects both pools, runs pending migrations and assembles the app.
pub async fn create_router(config: &Config) -> Result<Router, Error> {
    let session_pool = PgPool::connect(&config.database_url).await?;
    let manager = ConnectionManager::<PgConnection>::new(config.database_url.as_str());
    let db_connection_pool = Pool::builder().build(manager)?;

    let mut conn = db_connection_pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Migration(e.to_string()))?;
    tracing::info!("Migrations completed successfully");
    drop(conn);

    let session_store = PostgresStore::new(session_pool);
    session_store.migrate().await?;
    let session_store = tower_sessions::CachingSessionStore::new(MemoryStore::default(), session_store);
    let session_manager_layer =
        SessionManagerLayer::new(session_store).with_secure(config.session_secure);

    let auth_backend = models::Backend::new(db_connection_pool);
    let auth_layer = AuthManagerLayerBuilder::new(auth_backend, session_manager_layer).build();

    let app = Router::new()
        .merge(pages::router())
        .nest("/auth", auth::web::router())
        .nest("/api/rpc", rpc::web::router())
        .layer(auth_layer)
        .layer(TraceLayer::new_for_http())
        .nest_service("/pkg", ServeDir::new(&config.site_pkg_dir))
        .nest_service("/assets", ServeDir::new(&config.assets_dir));
    Ok(app)
}
