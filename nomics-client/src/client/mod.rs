mod config;
mod quote;

use reqwest::{Client as ReqwestClient, StatusCode};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::{error::NomicsClientError, primitives::ApiKey};

pub use config::*;
pub use quote::*;

const CURRENCY_IDS: &str = "BTC";
const PRICE_INTERVAL: &str = "1h";
const PER_PAGE: &str = "100";
const PAGE: &str = "1";

#[derive(Clone)]
pub struct NomicsClient {
    client: ReqwestClient,
    config: NomicsClientConfig,
    api_key: ApiKey,
}

impl NomicsClient {
    pub fn new(api_key: ApiKey, config: NomicsClientConfig) -> Result<Self, NomicsClientError> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
            api_key,
        })
    }

    /// Fetches the current BTC ticker snapshot. Anything other than a 200
    /// with a non-empty list of quotes is an error. Reporting is left to
    /// the caller.
    #[instrument(name = "nomics_client.latest_btc_quote", skip(self))]
    pub async fn latest_btc_quote(&self) -> Result<Quote, NomicsClientError> {
        let response = self
            .client
            .get(self.config.ticker_url.clone())
            .query(&[
                ("key", self.api_key.0.as_str()),
                ("ids", CURRENCY_IDS),
                ("interval", PRICE_INTERVAL),
                ("per-page", PER_PAGE),
                ("page", PAGE),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(NomicsClientError::UnexpectedStatus(response.status()));
        }

        parse_ticker_response(&response.text().await?)
    }
}

fn parse_ticker_response(body: &str) -> Result<Quote, NomicsClientError> {
    let quotes: Vec<Map<String, Value>> = serde_json::from_str(body)?;
    let first = quotes
        .into_iter()
        .next()
        .ok_or(NomicsClientError::EmptyTickerData)?;
    Quote::try_from(first)
}
