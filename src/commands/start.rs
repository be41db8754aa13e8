use anyhow::Result;
use colored::Colorize;
use reno_quote::{config, init_tracing, server};
use tracing::info;

/// Execute the start command
///
/// Loads configuration, initializes logging from it and serves until shutdown.
pub async fn execute(config_path: Option<&str>) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    init_tracing(&cfg.server.log_level, &cfg.server.log_format);

    println!("{}", "Starting reno-quote...".green());
    info!("Starting reno-quote v{}", env!("CARGO_PKG_VERSION"));

    server::start_server(cfg).await?;

    Ok(())
}
