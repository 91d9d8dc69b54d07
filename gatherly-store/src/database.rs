use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Pool, Postgres};
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::info;

#[derive(Clone)]
pub struct DbClient {
    pub pool: Pool<Postgres>,
}

impl DbClient {
    pub async fn new(connection_string: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(connection_string)
            .await?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Migrations completed successfully.");
        Ok(())
    }
}

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Process-wide pool, established on first use and reused for the life of
/// the process. Concurrent first callers resolve into the same
/// initialization; nobody gets a second pool.
pub async fn db_pool(connection_string: &str) -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        let client = DbClient::new(connection_string).await?;
        Ok(client.pool)
    })
    .await
}
