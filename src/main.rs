use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use reno_quote::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let config_path = args.config_path();

    // The server configures logging from its own config file
    let command = args.get_command();
    if !matches!(command, cli::Commands::Start) {
        init_tracing("info", "text");
    }

    match command {
        cli::Commands::Start => {
            commands::start::execute(config_path).await?;
        }
        cli::Commands::Test => {
            commands::test::execute(config_path)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(config_path)?,
            cli::ConfigCommands::Validate => commands::config::validate(config_path)?,
        },
        cli::Commands::Quote { requirement, json } => {
            commands::quote::execute(&requirement, json)?;
        }
        cli::Commands::Version => {
            println!("reno-quote v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
