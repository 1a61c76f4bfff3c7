use nomics_client::*;

fn api_key() -> ApiKey {
    ApiKey::from(std::env::var("NOMICS_KEY").expect("NOMICS_KEY not set"))
}

#[tokio::test]
#[ignore = "requires a NOMICS_KEY and network access"]
async fn latest_btc_quote() -> anyhow::Result<()> {
    let client = NomicsClient::new(api_key(), NomicsClientConfig::default())?;
    let quote = client.latest_btc_quote().await?;

    assert_eq!(quote.currency_id(), Some("BTC"));
    assert!(quote.price().is_some());
    assert!(!quote.price_timestamp().is_empty());

    Ok(())
}
