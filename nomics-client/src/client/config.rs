use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

#[serde_with::serde_as]
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct NomicsClientConfig {
    #[serde(default = "default_ticker_url")]
    pub ticker_url: Url,
    #[serde_as(as = "Option<serde_with::DurationSeconds<u64>>")]
    #[serde(default)]
    pub request_timeout: Option<Duration>,
}

impl Default for NomicsClientConfig {
    fn default() -> Self {
        Self {
            ticker_url: default_ticker_url(),
            request_timeout: None,
        }
    }
}

fn default_ticker_url() -> Url {
    Url::parse("https://api.nomics.com/v1/currencies/ticker").unwrap()
}

#[cfg(test)]
mod test_super {
    use super::*;

    #[test]
    fn defaults_to_public_ticker_endpoint() {
        let config = NomicsClientConfig::default();
        assert_eq!(
            config.ticker_url.as_str(),
            "https://api.nomics.com/v1/currencies/ticker"
        );
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn request_timeout_in_seconds() -> anyhow::Result<()> {
        let yml = r#"
ticker_url: "http://localhost:8080/v1/currencies/ticker"
request_timeout: 5
"#;
        let config: NomicsClientConfig = serde_yaml::from_str(yml)?;
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
        Ok(())
    }
}
