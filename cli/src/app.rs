use clap::Parser;
use std::path::PathBuf;

use kinesis_client::StreamName;

use super::config::Config;

#[derive(Parser)]
#[clap(version, long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[clap(
        short,
        long,
        env = "TICKERSTREAM_CONFIG",
        default_value = "tickerstream.yml",
        value_name = "FILE"
    )]
    config: PathBuf,

    /// Name of the destination stream
    stream_name: String,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_path(cli.config)?;
    run_cmd(config, StreamName::from(cli.stream_name)).await
}

async fn run_cmd(
    Config {
        producer,
        nomics,
        kinesis,
        secrets,
    }: Config,
    stream_name: StreamName,
) -> anyhow::Result<()> {
    println!("Tickerstream - v{}", env!("CARGO_PKG_VERSION"));
    println!("Starting producer for stream '{}'", stream_name);
    crate::tracing::init_tracer()?;

    price_producer::run(producer, nomics, kinesis, secrets, stream_name).await?;
    Ok(())
}
