mod config;
mod env;
mod error;
mod secrets_manager;

use async_trait::async_trait;

use nomics_client::ApiKey;

pub use config::*;
pub use env::*;
pub use error::*;
pub use secrets_manager::*;

/// Where the api key comes from.
#[async_trait]
pub trait SecretProvider {
    async fn api_key(&self) -> Result<ApiKey, SecretProviderError>;
}

/// Resolves the api key once at startup via the provider selected in the
/// config.
pub async fn fetch_api_key(
    config: SecretsConfig,
    region: &str,
) -> Result<ApiKey, SecretProviderError> {
    match config.provider {
        SecretProviderKind::SecretsManager => {
            SecretsManagerProvider::connect(&config, region)
                .await
                .api_key()
                .await
        }
        SecretProviderKind::Env => EnvProvider::new(&config).api_key().await,
    }
}
