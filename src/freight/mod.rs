//! Freight cost calculation engine
//!
//! Pure, synchronous pricing for LTL shipments moving origin → hub → destination:
//! - pallet: validated cargo unit descriptions
//! - rates: the immutable rate schedule (legs, flat fees, insurance basis)
//! - calculator: chargeable weight, aggregation and total cost
//! - breakdown: the rounded, ordered cost breakdown handed to renderers

pub mod breakdown;
pub mod calculator;
pub mod pallet;
pub mod rates;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub use breakdown::{CostBreakdown, CostLine};
pub use calculator::{
    aggregate_totals, compute_total_cost, measure_pallet, quote, PalletMeasure, ShipmentTotals,
};
pub use pallet::Pallet;
pub use rates::{DestinationRate, InsuranceBasis, RateSchedule};

/// Errors raised while pricing a shipment
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    /// Destination key is absent from the rate table
    #[error("unknown destination: {0}")]
    UnknownDestination(String),
    /// Origin is not one of the configured pickup cities
    #[error("unknown origin: {0}")]
    UnknownOrigin(String),
    /// Negative, non-finite or otherwise unusable input
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl QuoteError {
    /// Stable error type name surfaced to API callers
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::UnknownDestination(_) => "UnknownDestination",
            Self::UnknownOrigin(_) => "UnknownOrigin",
            Self::InvalidInput(_) => "InvalidInput",
        }
    }
}

/// Everything the calculator needs for one quote, plus the cosmetic invoice fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub pallets: Vec<Pallet>,
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub insurance_rate: f64,
    #[serde(default)]
    pub cargo_value: f64,
    #[serde(default)]
    pub stackable: bool,
    #[serde(
        default,
        deserialize_with = "deserialize_company",
        skip_serializing_if = "Option::is_none"
    )]
    pub company: Option<String>,
}

/// A blank company name is the same as none
pub(crate) fn non_blank(company: Option<String>) -> Option<String> {
    company.filter(|c| !c.trim().is_empty())
}

fn deserialize_company<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(non_blank)
}
