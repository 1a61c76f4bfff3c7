use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::error::NomicsClientError;

/// One ticker snapshot as returned by the price api. The raw object is
/// retained so the submitted record carries the element exactly as received.
#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    price_timestamp: String,
    fields: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Quote {
    type Error = NomicsClientError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let price_timestamp = fields
            .get("price_timestamp")
            .and_then(Value::as_str)
            .ok_or(NomicsClientError::MissingPriceTimestamp)?
            .to_string();
        Ok(Self {
            price_timestamp,
            fields,
        })
    }
}

impl Quote {
    pub fn price_timestamp(&self) -> &str {
        &self.price_timestamp
    }

    pub fn currency_id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<Decimal> {
        self.fields
            .get("price")
            .and_then(Value::as_str)
            .and_then(|price| price.parse().ok())
    }
}

impl Serialize for Quote {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.fields.serialize(serializer)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.fields).map_err(|_| fmt::Error)?;
        write!(f, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn ticker_element() -> Map<String, Value> {
        match json!({
            "id": "BTC",
            "currency": "BTC",
            "symbol": "BTC",
            "name": "Bitcoin",
            "price": "20735.50000000",
            "price_date": "2023-01-18T00:00:00Z",
            "price_timestamp": "2023-01-18T16:08:00Z",
            "rank": "1",
        }) {
            Value::Object(fields) => fields,
            _ => unreachable!(),
        }
    }

    #[test]
    fn quote_exposes_ticker_fields() -> anyhow::Result<()> {
        let quote = Quote::try_from(ticker_element())?;
        assert_eq!(quote.price_timestamp(), "2023-01-18T16:08:00Z");
        assert_eq!(quote.currency_id(), Some("BTC"));
        assert_eq!(quote.price(), Some(dec!(20735.5)));
        Ok(())
    }

    #[test]
    fn quote_requires_a_price_timestamp_string() {
        let mut fields = ticker_element();
        fields.remove("price_timestamp");
        assert!(matches!(
            Quote::try_from(fields),
            Err(NomicsClientError::MissingPriceTimestamp)
        ));

        let mut fields = ticker_element();
        fields.insert("price_timestamp".to_string(), json!(1674057600));
        assert!(matches!(
            Quote::try_from(fields),
            Err(NomicsClientError::MissingPriceTimestamp)
        ));
    }

    #[test]
    fn serializes_the_element_as_received() -> anyhow::Result<()> {
        let fields = ticker_element();
        let quote = Quote::try_from(fields.clone())?;
        let roundtrip: Map<String, Value> = serde_json::from_slice(&serde_json::to_vec(&quote)?)?;
        assert_eq!(roundtrip, fields);
        Ok(())
    }

    #[test]
    fn displays_the_raw_json_object() -> anyhow::Result<()> {
        let quote = Quote::try_from(ticker_element())?;
        let rendered: Value = serde_json::from_str(&quote.to_string())?;
        assert_eq!(rendered, Value::Object(ticker_element()));
        Ok(())
    }
}
