pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::{AppState, router};

/// Opens the database described by `config`, applies migrations and builds the shared state.
pub async fn connect(config: &Config) -> anyhow::Result<bittencourt_shared::State> {
    let write_pool = db::create_write_pool(&config.database.url).await?;
    bittencourt_db::migrate(&write_pool).await?;

    let read_pool =
        db::create_read_pool(&config.database.url, config.database.max_connections).await?;

    Ok(bittencourt_shared::State::new(read_pool, write_pool))
}
