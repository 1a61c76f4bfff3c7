#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

mod clock;
mod config;
mod error;
mod producer;
pub mod secrets;

use kinesis_client::{KinesisClient, KinesisClientConfig, StreamName};
use nomics_client::{NomicsClient, NomicsClientConfig};

pub use clock::*;
pub use config::*;
pub use error::*;
pub use producer::*;

pub async fn run(
    producer_config: PriceProducerConfig,
    nomics_client_config: NomicsClientConfig,
    kinesis_client_config: KinesisClientConfig,
    secrets_config: secrets::SecretsConfig,
    stream_name: StreamName,
) -> Result<(), PriceProducerError> {
    let api_key = secrets::fetch_api_key(secrets_config, &kinesis_client_config.region).await?;
    let source = NomicsClient::new(api_key, nomics_client_config)?;
    let sink = KinesisClient::connect(kinesis_client_config).await;

    QuoteProducer::new(source, sink, SystemClock, stream_name, producer_config)
        .run()
        .await
}
