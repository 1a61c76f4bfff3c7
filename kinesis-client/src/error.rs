use thiserror::Error;

use aws_sdk_kinesis::{error::SdkError, operation::put_record::PutRecordError};

#[derive(Error, Debug)]
pub enum KinesisClientError {
    #[error("KinesisClientError - PutRecord: {0}")]
    PutRecord(#[from] SdkError<PutRecordError>),
}
