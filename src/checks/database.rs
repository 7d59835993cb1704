// Database connectivity probe

use sea_orm::Database;
use tracing::info;

use crate::config::AppConfig;
use crate::error::CheckError;

/// Probes the configured database by opening a connection and pinging it.
///
/// The connection is dropped as soon as the probe resolves.
pub async fn execute(config: &AppConfig) -> Result<(), CheckError> {
    info!("Connecting to database: {}", config.database_url);

    let connection = Database::connect(&config.database_url).await?;
    connection.ping().await?;

    info!("Database probe succeeded");
    Ok(())
}
