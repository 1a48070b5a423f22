use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::QuoteError;

/// How the requested insurance rate is applied to the declared cargo value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsuranceBasis {
    /// Rate is a percentage: `rate / 100 * cargo_value`
    #[default]
    Percent,
    /// Rate is already a fraction: `rate * cargo_value`
    Fraction,
}

impl InsuranceBasis {
    /// Insurance premium for a declared cargo value. A zero cargo value always costs nothing.
    pub fn premium(self, rate: f64, cargo_value: f64) -> f64 {
        if cargo_value <= 0.0 {
            return 0.0;
        }
        match self {
            Self::Percent => rate / 100.0 * cargo_value,
            Self::Fraction => rate * cargo_value,
        }
    }
}

/// Second-leg (hub → destination) linehaul rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationRate {
    pub name: String,
    pub rate_per_kg: f64,
}

/// Immutable pricing configuration for the origin → hub → destination corridor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateSchedule {
    pub hub: String,
    pub origins: Vec<String>,
    pub destinations: Vec<DestinationRate>,
    pub first_leg_rate_per_kg: f64,
    pub customs_fee: f64,
    pub transit_fee: f64,
    pub handling_fee: f64,
    pub volumetric_kg_per_cbm: f64,
    pub insurance_basis: InsuranceBasis,
    pub currency: String,
}

impl Default for RateSchedule {
    fn default() -> Self {
        let destinations = [
            ("Baku, Azerbaijan", 0.3),
            ("Ganja, Azerbaijan", 0.35),
            ("Sumgait, Azerbaijan", 0.32),
            ("Tbilisi, Georgia", 0.4),
            ("Tashkent, Uzbekistan", 0.25),
        ];

        Self {
            hub: "Khorgos, Kazakhstan".to_string(),
            origins: [
                "Yiwu, China",
                "Guangzhou, China",
                "Shenzhen, China",
                "Shanghai, China",
                "Urumqi, China",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            destinations: destinations
                .into_iter()
                .map(|(name, rate_per_kg)| DestinationRate {
                    name: name.to_string(),
                    rate_per_kg,
                })
                .collect(),
            first_leg_rate_per_kg: 0.5,
            customs_fee: 150.0,
            transit_fee: 200.0,
            handling_fee: 50.0,
            volumetric_kg_per_cbm: 333.0,
            insurance_basis: InsuranceBasis::Percent,
            currency: "USD".to_string(),
        }
    }
}

impl RateSchedule {
    /// Per-kg second-leg rate for a destination
    pub fn rate_for(&self, destination: &str) -> Result<f64, QuoteError> {
        self.destinations
            .iter()
            .find(|d| d.name == destination)
            .map(|d| d.rate_per_kg)
            .ok_or_else(|| QuoteError::UnknownDestination(destination.to_string()))
    }

    pub fn check_origin(&self, origin: &str) -> Result<(), QuoteError> {
        if self.origins.iter().any(|o| o == origin) {
            Ok(())
        } else {
            Err(QuoteError::UnknownOrigin(origin.to_string()))
        }
    }

    /// Validate the schedule before it is put into service
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.hub.trim().is_empty() {
            anyhow::bail!("Rate schedule hub cannot be empty");
        }
        if self.origins.is_empty() {
            anyhow::bail!("At least one origin city must be configured");
        }
        if self.origins.iter().any(|o| o.trim().is_empty()) {
            anyhow::bail!("Origin city names cannot be empty");
        }
        if self.destinations.is_empty() {
            anyhow::bail!("At least one destination must be configured");
        }
        if self.currency.trim().is_empty() {
            anyhow::bail!("Currency label cannot be empty");
        }

        let mut seen = HashSet::new();
        for destination in &self.destinations {
            if destination.name.trim().is_empty() {
                anyhow::bail!("Destination names cannot be empty");
            }
            if !seen.insert(destination.name.as_str()) {
                anyhow::bail!("Duplicate destination: {}", destination.name);
            }
            check_amount(&format!("rate for '{}'", destination.name), destination.rate_per_kg)?;
        }

        check_amount("first_leg_rate_per_kg", self.first_leg_rate_per_kg)?;
        check_amount("customs_fee", self.customs_fee)?;
        check_amount("transit_fee", self.transit_fee)?;
        check_amount("handling_fee", self.handling_fee)?;
        check_amount("volumetric_kg_per_cbm", self.volumetric_kg_per_cbm)?;

        Ok(())
    }
}

fn check_amount(name: &str, value: f64) -> anyhow::Result<()> {
    if !value.is_finite() || value < 0.0 {
        anyhow::bail!("{} must be a non-negative number (got {})", name, value);
    }
    Ok(())
}
