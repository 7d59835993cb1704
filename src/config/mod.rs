// Configuration management from environment variables

use std::env;
use std::path::PathBuf;

use tracing::error;

use crate::error::CheckError;

/// Name of the service-account credentials file under the base directory
const CREDENTIALS_FILE: &str = "key.json";

/// Configuration settings for the health check CLI
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database URL
    pub database_url: String,
    /// Base directory holding the service-account credentials file
    pub base_dir: PathBuf,
    /// Name of the storage bucket to probe
    pub gcs_bucket: String,
}

impl AppConfig {
    /// Loads configuration from environment variables
    pub fn from_env() -> Result<Self, CheckError> {
        let database_url = require_var("DATABASE_URL")?;
        let base_dir = env::var("BASE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let gcs_bucket = require_var("GS_BUCKET_NAME")?;

        Ok(Self {
            database_url,
            base_dir,
            gcs_bucket,
        })
    }

    /// Returns the path to the service-account credentials file
    pub fn credentials_path(&self) -> PathBuf {
        self.base_dir.join(CREDENTIALS_FILE)
    }
}

fn require_var(name: &'static str) -> Result<String, CheckError> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(_) => {
            error!("{} environment variable not set", name);
            Err(CheckError::Config(name))
        }
    }
}
