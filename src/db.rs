use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;

use crate::config::AppConfig;

/// Pool over the `Any` driver: MySQL in production, SQLite in tests.
pub type DbPool = AnyPool;

/// Open the pool. A failed first connection is logged and not fatal: the pool
/// falls back to connecting lazily, so requests fail with 500 until the
/// database comes back.
pub async fn init_pool(config: &AppConfig) -> Result<DbPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let options = AnyPoolOptions::new().max_connections(config.max_connections);
    match options.clone().connect(&config.database_url).await {
        Ok(pool) => {
            log::info!("Connected to database");
            Ok(pool)
        }
        Err(e) => {
            log::error!("Failed to connect to database: {e}");
            options.connect_lazy(&config.database_url)
        }
    }
}
