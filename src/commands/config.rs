use anyhow::Result;
use colored::Colorize;
use ltl_quote::config::{self, Config};
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (file + environment + defaults) as TOML
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();
    println!("{}", toml::to_string_pretty(&cfg)?);

    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    for line in summary(&cfg) {
        println!("  {}", line);
    }

    Ok(())
}

fn summary(cfg: &Config) -> Vec<String> {
    let rates = &cfg.rates;
    vec![
        format!("Server: {}:{}", cfg.server.host, cfg.server.port),
        format!("Log: {} ({})", cfg.server.log_level, cfg.server.log_format),
        format!("Hub: {}", rates.hub),
        format!("Origins: {}", rates.origins.len()),
        format!("Destinations: {}", rates.destinations.len()),
        format!(
            "Flat fees: customs {:.2}, transit {:.2}, handling {:.2} {}",
            rates.customs_fee, rates.transit_fee, rates.handling_fee, rates.currency
        ),
        format!("Insurance basis: {:?}", rates.insurance_basis),
        format!(
            "Metrics: {}",
            if cfg.metrics.enabled {
                cfg.metrics.endpoint.as_str()
            } else {
                "disabled"
            }
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_schedule() {
        let lines = summary(&Config::default());

        assert!(lines.contains(&"Hub: Khorgos, Kazakhstan".to_string()));
        assert!(lines.contains(&"Destinations: 5".to_string()));
        assert!(lines.contains(&"Metrics: /metrics".to_string()));
    }

    #[test]
    fn test_default_config_renders_as_toml() {
        let rendered = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(rendered.contains("[[rates.destinations]]"));
        assert!(rendered.contains("insurance_basis = \"percent\""));
    }
}
