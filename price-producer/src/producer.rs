use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use kinesis_client::{KinesisClient, KinesisClientError, PartitionKey, RecordReceipt, StreamName};
use nomics_client::{NomicsClient, NomicsClientError, Quote};

use crate::{clock::Clock, config::PriceProducerConfig, error::PriceProducerError};

/// Source of ticker snapshots.
#[async_trait]
pub trait TickerSource {
    async fn latest_quote(&self) -> Result<Quote, NomicsClientError>;
}

#[async_trait]
impl TickerSource for NomicsClient {
    async fn latest_quote(&self) -> Result<Quote, NomicsClientError> {
        self.latest_btc_quote().await
    }
}

/// Destination stream for serialized quotes.
#[async_trait]
pub trait RecordSink {
    async fn put_record(
        &self,
        stream_name: &StreamName,
        partition_key: PartitionKey,
        data: Vec<u8>,
    ) -> Result<RecordReceipt, KinesisClientError>;
}

#[async_trait]
impl RecordSink for KinesisClient {
    async fn put_record(
        &self,
        stream_name: &StreamName,
        partition_key: PartitionKey,
        data: Vec<u8>,
    ) -> Result<RecordReceipt, KinesisClientError> {
        KinesisClient::put_record(self, stream_name, partition_key, data).await
    }
}

/// What a single poll did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Produced(RecordReceipt),
    FetchSkipped,
    RecordDropped,
}

pub struct QuoteProducer<S, K, C> {
    source: S,
    sink: K,
    clock: C,
    stream_name: StreamName,
    config: PriceProducerConfig,
}

impl<S: TickerSource, K: RecordSink, C: Clock> QuoteProducer<S, K, C> {
    pub fn new(
        source: S,
        sink: K,
        clock: C,
        stream_name: StreamName,
        config: PriceProducerConfig,
    ) -> Self {
        Self {
            source,
            sink,
            clock,
            stream_name,
            config,
        }
    }

    /// Polls forever, sleeping the configured interval after every
    /// iteration. Returns only when an iteration hits an error the swallow
    /// policy does not cover.
    pub async fn run(&self) -> Result<(), PriceProducerError> {
        loop {
            self.run_iteration().await?;
            self.clock.sleep(self.config.poll_interval).await;
        }
    }

    #[instrument(
        name = "price_producer.run_iteration",
        skip(self),
        fields(stream_name = %self.stream_name)
    )]
    pub async fn run_iteration(&self) -> Result<PollOutcome, PriceProducerError> {
        let quote = match self.source.latest_quote().await {
            Ok(quote) => quote,
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "failed to retrieve data from nomics api");
                return Ok(PollOutcome::FetchSkipped);
            }
            Err(e) => return Err(e.into()),
        };
        info!(quote = %quote, "retrieved quote");

        let data = serde_json::to_vec(&quote)?;
        let partition_key = PartitionKey::from(quote.price_timestamp());
        let result = self
            .sink
            .put_record(&self.stream_name, partition_key, data)
            .await;
        Ok(handle_submission(quote, result))
    }
}

/// Submission policy: log the result and keep going. A failed record is
/// dropped, never buffered or retried.
fn handle_submission(
    quote: Quote,
    result: Result<RecordReceipt, KinesisClientError>,
) -> PollOutcome {
    match result {
        Ok(receipt) => {
            info!(
                sequence_number = %receipt.sequence_number,
                shard_id = %receipt.shard_id,
                "produced record"
            );
            PollOutcome::Produced(receipt)
        }
        Err(error) => {
            error!(error = %error, record = %quote, "error producing record");
            PollOutcome::RecordDropped
        }
    }
}
