use std::net::SocketAddr;
use std::sync::Arc;

use gatherly_api::revalidate::LoggingRevalidator;
use gatherly_api::state::{AppState, AuthConfig};
use gatherly_api::stripe::StripeCheckout;
use gatherly_api::uploads::HttpFileStore;
use gatherly_api::app;
use gatherly_store::{
    db_pool, DbClient, PgCategoryRepository, PgEventRepository, PgOrderRepository,
    PgUserRepository,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatherly_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = gatherly_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Gatherly API on port {}", config.server.port);

    // One pool for the process, established here and reused everywhere.
    let pool = db_pool(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    DbClient { pool: pool.clone() }
        .migrate()
        .await
        .expect("Failed to run migrations");

    let app_state = AppState {
        users: Arc::new(PgUserRepository::new(pool.clone())),
        events: Arc::new(PgEventRepository::new(pool.clone())),
        categories: Arc::new(PgCategoryRepository::new(pool.clone())),
        orders: Arc::new(PgOrderRepository::new(pool.clone())),
        checkout: Arc::new(StripeCheckout::new(
            config.payment.api_url.clone(),
            config.payment.secret_key.clone(),
        )),
        uploader: Arc::new(HttpFileStore::new(
            config.uploads.endpoint.clone(),
            config.uploads.api_key.clone(),
        )),
        revalidator: Arc::new(LoggingRevalidator),
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
        },
        base_url: config.app.base_url.clone(),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
