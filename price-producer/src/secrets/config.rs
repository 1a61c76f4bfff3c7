use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SecretsConfig {
    #[serde(default)]
    pub provider: SecretProviderKind,
    #[serde(default = "default_secret_name")]
    pub secret_id: String,
    #[serde(default = "default_secret_name")]
    pub secret_field: String,
    #[serde(default = "default_secret_name")]
    pub env_var: String,
    #[serde(default)]
    pub env_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SecretProviderKind {
    #[default]
    SecretsManager,
    Env,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            provider: SecretProviderKind::default(),
            secret_id: default_secret_name(),
            secret_field: default_secret_name(),
            env_var: default_secret_name(),
            env_file: None,
        }
    }
}

fn default_secret_name() -> String {
    "NOMICS_KEY".to_string()
}
