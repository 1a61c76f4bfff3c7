use serde::{Deserialize, Serialize};
use std::time::Duration;

#[serde_with::serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceProducerConfig {
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    #[serde(default = "default_poll_interval")]
    pub poll_interval: Duration,
}

impl Default for PriceProducerConfig {
    fn default() -> Self {
        Self {
            poll_interval: default_poll_interval(),
        }
    }
}

fn default_poll_interval() -> Duration {
    Duration::from_secs(10)
}

#[cfg(test)]
mod test_super {
    use super::*;

    #[test]
    fn poll_interval_defaults_to_ten_seconds() {
        assert_eq!(
            PriceProducerConfig::default().poll_interval,
            Duration::from_secs(10)
        );
    }

    #[test]
    fn poll_interval_in_seconds() -> anyhow::Result<()> {
        let config: PriceProducerConfig = serde_yaml::from_str("poll_interval: 3")?;
        assert_eq!(config.poll_interval, Duration::from_secs(3));
        Ok(())
    }
}
