mod config;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_kinesis::{primitives::Blob, Client};
use tracing::instrument;

use crate::{error::KinesisClientError, primitives::*};

pub use config::*;

#[derive(Clone)]
pub struct KinesisClient {
    client: Client,
}

impl KinesisClient {
    pub async fn connect(config: KinesisClientConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region))
            .load()
            .await;
        Self {
            client: Client::new(&sdk_config),
        }
    }

    #[instrument(
        name = "kinesis_client.put_record",
        skip(self, data),
        fields(stream_name = %stream_name, partition_key = %partition_key, payload_bytes = data.len()),
        err
    )]
    pub async fn put_record(
        &self,
        stream_name: &StreamName,
        partition_key: PartitionKey,
        data: Vec<u8>,
    ) -> Result<RecordReceipt, KinesisClientError> {
        let output = self
            .client
            .put_record()
            .stream_name(stream_name.0.clone())
            .partition_key(partition_key.0)
            .data(Blob::new(data))
            .send()
            .await?;
        Ok(RecordReceipt {
            sequence_number: output.sequence_number().to_string(),
            shard_id: output.shard_id().to_string(),
        })
    }
}
