// Object storage connectivity probe

use google_cloud_storage::client::google_cloud_auth::credentials::CredentialsFile;
use google_cloud_storage::client::{Client, ClientConfig};
use google_cloud_storage::http::buckets::get::GetBucketRequest;
use tracing::info;

use crate::config::AppConfig;
use crate::error::CheckError;

/// Probes the configured storage bucket.
///
/// Loads service-account credentials from `key.json` under the base
/// directory, builds a client with them and fetches the bucket metadata.
/// Returns the bucket name reported by the service. Every failure along the
/// way, from a missing credentials file to a network fault, collapses into
/// [`CheckError::Storage`].
pub async fn execute(config: &AppConfig) -> Result<String, CheckError> {
    let key_path = config.credentials_path();
    info!("Loading storage credentials from {}", key_path.display());

    let credentials = CredentialsFile::new_from_file(key_path.display().to_string())
        .await
        .map_err(|e| CheckError::Storage(e.to_string()))?;

    let client_config = ClientConfig::default()
        .with_credentials(credentials)
        .await
        .map_err(|e| CheckError::Storage(e.to_string()))?;
    let client = Client::new(client_config);

    let bucket = client
        .get_bucket(&GetBucketRequest {
            bucket: config.gcs_bucket.clone(),
            ..Default::default()
        })
        .await
        .map_err(|e| CheckError::Storage(e.to_string()))?;

    info!("Bucket metadata fetched for '{}'", bucket.name);
    Ok(bucket.name)
}
