use anyhow::Result;
use colored::Colorize;
use ltl_quote::{config, init_tracing, server};
use std::path::Path;
use tracing::info;

/// Execute the start command
///
/// Loads configuration, initializes logging from it, then serves until shutdown.
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting LTL quote service...".green());

    let cfg = config::load_config(config_path)?;
    init_tracing(&cfg.server.log_level, cfg.server.log_format == "json");

    if config_path.exists() {
        info!("Loaded configuration from {}", config_path.display());
    } else {
        info!(
            "No configuration file at {}, using built-in rate schedule",
            config_path.display()
        );
    }

    server::start_server(cfg, config_path.to_path_buf()).await?;

    Ok(())
}
