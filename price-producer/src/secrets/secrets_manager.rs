use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::Client;
use serde_json::{Map, Value};
use tracing::instrument;

use nomics_client::ApiKey;

use super::{config::SecretsConfig, error::SecretProviderError, SecretProvider};

/// Reads the api key out of an AWS Secrets Manager secret. The secret string
/// is a JSON object keyed by field name.
pub struct SecretsManagerProvider {
    client: Client,
    secret_id: String,
    secret_field: String,
}

impl SecretsManagerProvider {
    pub async fn connect(config: &SecretsConfig, region: &str) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self {
            client: Client::new(&sdk_config),
            secret_id: config.secret_id.clone(),
            secret_field: config.secret_field.clone(),
        }
    }
}

#[async_trait]
impl SecretProvider for SecretsManagerProvider {
    #[instrument(
        name = "secrets.secrets_manager.api_key",
        skip(self),
        fields(secret_id = %self.secret_id),
        err
    )]
    async fn api_key(&self) -> Result<ApiKey, SecretProviderError> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(self.secret_id.clone())
            .send()
            .await?;
        let secret_string = output
            .secret_string()
            .ok_or_else(|| SecretProviderError::MissingSecretString(self.secret_id.clone()))?;
        let fields: Map<String, Value> = serde_json::from_str(secret_string)?;
        let key = fields
            .get(&self.secret_field)
            .and_then(Value::as_str)
            .ok_or_else(|| SecretProviderError::MissingSecretField(self.secret_field.clone()))?;
        Ok(ApiKey::from(key))
    }
}
