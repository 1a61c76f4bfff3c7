use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct KinesisClientConfig {
    #[serde(default = "default_region")]
    pub region: String,
}

impl Default for KinesisClientConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}
