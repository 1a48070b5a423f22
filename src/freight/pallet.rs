use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::QuoteError;

/// One cargo unit-type: dimensions in centimetres, weight per unit in kilograms
///
/// Fields are private so a `Pallet` can only exist in a validated state, whether it
/// was built with [`Pallet::new`], parsed from the CLI shorthand or deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPallet")]
pub struct Pallet {
    length: f64,
    width: f64,
    height: f64,
    weight: f64,
    quantity: u32,
}

#[derive(Deserialize)]
struct RawPallet {
    length: f64,
    width: f64,
    height: f64,
    weight: f64,
    #[serde(default = "default_quantity")]
    quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl TryFrom<RawPallet> for Pallet {
    type Error = QuoteError;

    fn try_from(raw: RawPallet) -> Result<Self, Self::Error> {
        Pallet::new(raw.length, raw.width, raw.height, raw.weight, raw.quantity)
    }
}

impl Pallet {
    pub fn new(
        length: f64,
        width: f64,
        height: f64,
        weight: f64,
        quantity: u32,
    ) -> Result<Self, QuoteError> {
        check_measure("length", length)?;
        check_measure("width", width)?;
        check_measure("height", height)?;
        check_measure("weight", weight)?;
        if quantity == 0 {
            return Err(QuoteError::InvalidInput(
                "pallet quantity must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            length,
            width,
            height,
            weight,
            quantity,
        })
    }

    /// Length in centimetres
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Width in centimetres
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in centimetres
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Actual weight of a single unit in kilograms
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

fn check_measure(name: &str, value: f64) -> Result<(), QuoteError> {
    if !value.is_finite() {
        return Err(QuoteError::InvalidInput(format!(
            "pallet {} must be a finite number",
            name
        )));
    }
    if value < 0.0 {
        return Err(QuoteError::InvalidInput(format!(
            "pallet {} cannot be negative (got {})",
            name, value
        )));
    }
    Ok(())
}

/// Parses the CLI shorthand `LxWxH:WEIGHT[:QTY]`, e.g. `120x80x100:200:3`
impl FromStr for Pallet {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            QuoteError::InvalidInput(format!(
                "pallet '{}' must look like LxWxH:WEIGHT[:QTY]",
                s
            ))
        };

        let mut parts = s.trim().split(':');
        let dims = parts.next().ok_or_else(invalid)?;
        let weight = parts.next().ok_or_else(invalid)?;
        let quantity = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        let dims: Vec<f64> = dims
            .split(|c: char| c == 'x' || c == 'X')
            .map(|d| d.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?;
        let [length, width, height] = dims[..] else {
            return Err(invalid());
        };

        let weight = weight.trim().parse::<f64>().map_err(|_| invalid())?;
        let quantity = match quantity {
            Some(q) => q.trim().parse::<u32>().map_err(|_| invalid())?,
            None => 1,
        };

        Pallet::new(length, width, height, weight, quantity)
    }
}
