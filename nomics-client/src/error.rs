use reqwest::StatusCode;
use serde_json::Error as SerdeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NomicsClientError {
    #[error("NomicsClientError - Reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("NomicsClientError - UnexpectedStatus: ticker request returned {0}")]
    UnexpectedStatus(StatusCode),
    #[error("NomicsClientError - SerdeError: {0}")]
    SerializationError(#[from] SerdeError),
    #[error("NomicsClientError - EmptyTickerData: ticker response contained no quotes")]
    EmptyTickerData,
    #[error("NomicsClientError - MissingPriceTimestamp: quote has no price_timestamp string")]
    MissingPriceTimestamp,
}

impl NomicsClientError {
    /// Whether the polling loop can swallow the error and try again on the
    /// next iteration. Transport failures are not recoverable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Reqwest(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_status_and_bad_data_are_recoverable() {
        let bad_status = NomicsClientError::UnexpectedStatus(StatusCode::SERVICE_UNAVAILABLE);
        assert!(bad_status.is_recoverable());
        assert!(NomicsClientError::EmptyTickerData.is_recoverable());
        assert!(NomicsClientError::MissingPriceTimestamp.is_recoverable());
    }
}
