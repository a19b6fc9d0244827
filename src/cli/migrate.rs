//! Database migration commands

use bittencourt::Config;
use sqlx::{Sqlite, migrate::MigrateDatabase};

/// Run all database migrations
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Migrating database");

    let pool = bittencourt::db::create_pool(&config.database.url, 1).await?;
    bittencourt_db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Database migrated");

    Ok(())
}

/// Drop the database and run migrations
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    if Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Dropping database {}", config.database.url);
        Sqlite::drop_database(&config.database.url).await?;
    }

    migrate(config).await
}
