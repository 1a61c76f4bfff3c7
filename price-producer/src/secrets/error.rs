use serde_json::Error as SerdeError;
use thiserror::Error;

use aws_sdk_secretsmanager::{error::SdkError, operation::get_secret_value::GetSecretValueError};

#[derive(Error, Debug)]
pub enum SecretProviderError {
    #[error("SecretProviderError - GetSecretValue: {0}")]
    GetSecretValue(#[from] SdkError<GetSecretValueError>),
    #[error("SecretProviderError - MissingSecretString: secret {0} has no string payload")]
    MissingSecretString(String),
    #[error("SecretProviderError - MissingSecretField: {0} not present in secret payload")]
    MissingSecretField(String),
    #[error("SecretProviderError - SerdeError: {0}")]
    SerializationError(#[from] SerdeError),
    #[error("SecretProviderError - EnvFile: {0}")]
    EnvFile(#[from] dotenv::Error),
    #[error("SecretProviderError - MissingEnvVar: {0} is not set")]
    MissingEnvVar(String),
}
