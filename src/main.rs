use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use ltl_quote::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let command = args.get_command();

    // The server sets up logging itself once its configuration is loaded
    if !matches!(command, cli::Commands::Start) {
        init_tracing("warn", false);
    }

    match command {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Quote(quote_args) => {
            commands::quote::execute(&args.config, quote_args)?;
        }
        cli::Commands::Routes => {
            commands::routes::execute(&args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("LTL Quote v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
