use async_trait::async_trait;
use std::path::{Path, PathBuf};

use nomics_client::ApiKey;

use super::{config::SecretsConfig, error::SecretProviderError, SecretProvider};

/// Reads the api key from the process environment, falling back to a
/// dotenv-format file when one is configured. A variable already present in
/// the environment wins over the file.
pub struct EnvProvider {
    env_var: String,
    env_file: Option<PathBuf>,
}

impl EnvProvider {
    pub fn new(config: &SecretsConfig) -> Self {
        Self {
            env_var: config.env_var.clone(),
            env_file: config.env_file.clone(),
        }
    }
}

#[async_trait]
impl SecretProvider for EnvProvider {
    async fn api_key(&self) -> Result<ApiKey, SecretProviderError> {
        if let Ok(key) = std::env::var(&self.env_var) {
            return Ok(ApiKey::from(key));
        }
        if let Some(path) = &self.env_file {
            if let Some(value) = read_env_file(path, &self.env_var)? {
                return Ok(ApiKey::from(value));
            }
        }
        Err(SecretProviderError::MissingEnvVar(self.env_var.clone()))
    }
}

// The iterator api is deprecated in dotenv 0.15, but it is the only one that
// leaves the process environment untouched.
#[allow(deprecated)]
fn read_env_file(path: &Path, var: &str) -> Result<Option<String>, SecretProviderError> {
    for item in dotenv::from_path_iter(path)? {
        let (name, value) = item?;
        if name == var {
            return Ok(Some(value));
        }
    }
    Ok(None)
}
