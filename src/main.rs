use anyhow::Result;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tyuo_speak::{cli, config::Config, invoker::HttpSpeakClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::default();

    // RUST_LOG overrides the built-in level; an unusable value falls back to it
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logs.level));

    // stdout is reserved for the service's answer
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .json()
        .init();

    debug!("Invoking speak service at {}", config.base_url);

    let args = cli::lossy_args(std::env::args_os().skip(1));
    let client = HttpSpeakClient::new(config)?;
    let mut stdout = io::stdout().lock();
    cli::run(&client, args, &mut stdout).await?;

    Ok(())
}
