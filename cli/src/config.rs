use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use kinesis_client::KinesisClientConfig;
use nomics_client::NomicsClientConfig;
use price_producer::{secrets::SecretsConfig, PriceProducerConfig};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub producer: PriceProducerConfig,
    #[serde(default)]
    pub nomics: NomicsClientConfig,
    #[serde(default)]
    pub kinesis: KinesisClientConfig,
    #[serde(default)]
    pub secrets: SecretsConfig,
}

impl Config {
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }
        let config_file = std::fs::read_to_string(path).context("Couldn't read config file")?;
        let config: Config =
            serde_yaml::from_str(&config_file).context("Couldn't parse config file")?;
        Ok(config)
    }
}

#[cfg(test)]
mod test_super {
    use super::*;

    #[test]
    fn parses_a_full_config() -> anyhow::Result<()> {
        let yml = r#"
producer:
  poll_interval: 10
nomics:
  ticker_url: "https://api.nomics.com/v1/currencies/ticker"
kinesis:
  region: us-east-1
secrets:
  provider: env
  env_file: ".env"
"#;
        let config: Config = serde_yaml::from_str(yml)?;
        assert_eq!(config.kinesis.region, "us-east-1");
        assert_eq!(
            config.producer.poll_interval,
            std::time::Duration::from_secs(10)
        );
        Ok(())
    }

    #[test]
    fn missing_file_falls_back_to_defaults() -> anyhow::Result<()> {
        let config = Config::from_path("does-not-exist.yml")?;
        assert_eq!(config.kinesis.region, "us-east-1");
        assert_eq!(
            config.producer.poll_interval,
            std::time::Duration::from_secs(10)
        );
        Ok(())
    }
}
