// Health check routines and orchestration

pub mod database;
pub mod storage;

use tracing::error;

use crate::config::AppConfig;
use crate::error::CheckError;

/// Runs the database and storage checks in order and reports to stdout.
///
/// The first failing check short-circuits: its context line and error text
/// are printed and the error is returned so the caller can map it to a
/// non-zero exit status. The success banner only appears when both checks
/// pass.
pub async fn run_health_check(config: &AppConfig) -> Result<(), CheckError> {
    println!("🔍 Running system health checks...\n");

    match database::execute(config).await {
        Ok(()) => println!("✅ Database connection successful"),
        Err(e) => {
            error!("Database check failed: {}", e);
            println!("❌ Database connection failed:");
            println!("{}", e);
            return Err(e);
        }
    }

    match storage::execute(config).await {
        Ok(bucket) => println!("✅ GCS bucket '{}' accessible", bucket),
        Err(e) => {
            error!("Storage check failed: {}", e);
            println!("❌ GCS connection failed:");
            println!("{}", e);
            return Err(e);
        }
    }

    println!("\n✅ All connections OK! You're good to go 🎉");
    Ok(())
}
