use mongodb::{
    Client,
    bson::doc,
    options::{ClientOptions, Tls, TlsOptions},
};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Translate a [`MongoConfig`] into driver options.
///
/// Fails if the connection string does not parse or the credentials file is
/// missing.
pub async fn client_options(config: &MongoConfig) -> DatabaseResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.url)
        .await
        .map_err(|e| DatabaseError::ConfigError(e.to_string()))?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    if let Some(ref path) = config.credentials_file {
        if !path.is_file() {
            return Err(DatabaseError::ConfigError(format!(
                "credentials file {} does not exist",
                path.display()
            )));
        }
        options.tls = Some(Tls::Enabled(
            TlsOptions::builder().cert_key_file_path(path.clone()).build(),
        ));
    }

    Ok(options)
}

/// Connect and verify the deployment answers a `ping`.
pub async fn connect(config: &MongoConfig) -> DatabaseResult<Client> {
    info!(url = %config.redacted_url(), "Connecting to MongoDB");

    let options = client_options(config).await?;
    let client = Client::with_options(options)
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!(database = %config.database, "Connected to MongoDB");
    Ok(client)
}

/// [`connect`] with exponential backoff, for use at startup.
///
/// Configuration errors are not retried.
pub async fn connect_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<Client> {
    client_options(config).await?;
    retry_with_backoff(|| connect(config), retry_config.unwrap_or_default()).await
}
