use serde::ser::{Serialize, SerializeMap, Serializer};

/// Round to 2 decimal places for presentation
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One labelled line of a cost breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CostLine {
    pub label: String,
    pub value: f64,
}

/// Rounded result of one quote
///
/// Serializes as a JSON object whose keys are the display labels, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub currency: String,
    pub actual_weight_kg: f64,
    pub volume_cbm: f64,
    pub volumetric_weight_kg: f64,
    pub chargeable_weight_kg: f64,
    pub first_leg_cost: f64,
    pub second_leg_cost: f64,
    pub customs_fee: f64,
    pub transit_fee: f64,
    pub handling_fee: f64,
    pub insurance_cost: f64,
    pub total_cost: f64,
}

impl CostBreakdown {
    /// Label → value pairs in display order
    pub fn lines(&self) -> Vec<CostLine> {
        let cur = &self.currency;
        let line = |label: String, value: f64| CostLine { label, value };

        vec![
            line("Total Actual Weight (kg)".to_string(), self.actual_weight_kg),
            line("Total Volume (CBM)".to_string(), self.volume_cbm),
            line("Volumetric Weight (kg)".to_string(), self.volumetric_weight_kg),
            line("Chargeable Weight (kg)".to_string(), self.chargeable_weight_kg),
            line(format!("First Leg Cost ({})", cur), self.first_leg_cost),
            line(format!("Second Leg Cost ({})", cur), self.second_leg_cost),
            line(format!("Customs Fee ({})", cur), self.customs_fee),
            line(format!("Transit Fee ({})", cur), self.transit_fee),
            line(format!("Handling Fee ({})", cur), self.handling_fee),
            line(format!("Insurance Cost ({})", cur), self.insurance_cost),
            line(format!("Total Cost ({})", cur), self.total_cost),
        ]
    }
}

impl Serialize for CostBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let lines = self.lines();
        let mut map = serializer.serialize_map(Some(lines.len()))?;
        for line in &lines {
            map.serialize_entry(&line.label, &line.value)?;
        }
        map.end()
    }
}
