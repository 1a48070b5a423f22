use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::freight::RateSchedule;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub rates: RateSchedule,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "/metrics".to_string(),
        }
    }
}

/// Load configuration from an optional TOML file plus `LTL_QUOTE__*` environment overrides
///
/// A missing file is not an error: the built-in rate schedule is used.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("LTL_QUOTE").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.trim().is_empty() {
        anyhow::bail!("Server host cannot be empty");
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}': expected 'text' or 'json'", other),
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!("Metrics endpoint must start with '/'");
    }
    if cfg.metrics.enabled
        && ["/quote", "/routes", "/health", "/ready"].contains(&cfg.metrics.endpoint.as_str())
    {
        anyhow::bail!(
            "Metrics endpoint '{}' collides with a built-in route",
            cfg.metrics.endpoint
        );
    }

    cfg.rates.validate()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freight::InsuranceBasis;
    use std::io::Write;

    fn write_temp_config(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("ltl-quote-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("ltl-quote-does-not-exist.toml");
        let cfg = load_config(&path).unwrap();

        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.rates, RateSchedule::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let path = write_temp_config(
            r#"
[server]
port = 9090
log_format = "json"

[rates]
hub = "Almaty, Kazakhstan"
origins = ["Xi'an, China"]
first_leg_rate_per_kg = 0.45
insurance_basis = "fraction"

[[rates.destinations]]
name = "Baku, Azerbaijan"
rate_per_kg = 0.3
"#,
        );

        let cfg = load_config(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.log_format, "json");
        assert_eq!(cfg.rates.hub, "Almaty, Kazakhstan");
        assert_eq!(cfg.rates.origins, vec!["Xi'an, China".to_string()]);
        assert_eq!(cfg.rates.destinations.len(), 1);
        assert_eq!(cfg.rates.destinations[0].name, "Baku, Azerbaijan");
        assert_eq!(cfg.rates.first_leg_rate_per_kg, 0.45);
        assert_eq!(cfg.rates.insurance_basis, InsuranceBasis::Fraction);
        assert_eq!(cfg.rates.customs_fee, 150.0);
    }

    #[test]
    fn test_load_config_rejects_invalid_rates() {
        let path = write_temp_config(
            r#"
[rates]
transit_fee = -10.0
"#,
        );

        let result = load_config(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("transit_fee"));
    }

    #[test]
    fn test_validate_config_rejects_log_format() {
        let mut cfg = Config::default();
        cfg.server.log_format = "xml".to_string();

        let result = validate_config(&cfg);
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_validate_config_rejects_colliding_metrics_endpoint() {
        let mut cfg = Config::default();
        cfg.metrics.endpoint = "/quote".to_string();

        let result = validate_config(&cfg);
        assert!(result.unwrap_err().to_string().contains("collides"));
    }

    #[test]
    fn test_disabled_metrics_endpoint_not_checked() {
        let mut cfg = Config::default();
        cfg.metrics.enabled = false;
        cfg.metrics.endpoint = "metrics".to_string();

        assert!(validate_config(&cfg).is_ok());
    }
}
