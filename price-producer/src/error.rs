use serde_json::Error as SerdeError;
use thiserror::Error;

use crate::secrets::SecretProviderError;

#[derive(Error, Debug)]
pub enum PriceProducerError {
    #[error("PriceProducerError - NomicsClient: {0}")]
    NomicsClient(#[from] nomics_client::NomicsClientError),
    #[error("PriceProducerError - SecretProvider: {0}")]
    SecretProvider(#[from] SecretProviderError),
    #[error("PriceProducerError - SerdeError: {0}")]
    SerializationError(#[from] SerdeError),
}
