use super::breakdown::{round2, CostBreakdown};
use super::{Pallet, QuoteError, QuoteRequest, RateSchedule};

/// Weight and volume of one pallet line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PalletMeasure {
    pub actual_weight_kg: f64,
    pub volume_cbm: f64,
    pub volumetric_weight_kg: f64,
    /// max(actual, volumetric)
    pub chargeable_weight_kg: f64,
}

/// Unrounded totals over a whole shipment
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShipmentTotals {
    pub units: u64,
    pub actual_weight_kg: f64,
    pub volume_cbm: f64,
    pub volumetric_weight_kg: f64,
    /// Sum of per-pallet chargeable weights, not max() of the other totals
    pub chargeable_weight_kg: f64,
}

/// Chargeable weight of a single unit given its dimensions (cm) and actual weight (kg)
pub fn measure_pallet(
    length_cm: f64,
    width_cm: f64,
    height_cm: f64,
    actual_weight_kg: f64,
    kg_per_cbm: f64,
) -> PalletMeasure {
    let volume_cbm = (length_cm / 100.0) * (width_cm / 100.0) * (height_cm / 100.0);
    let volumetric_weight_kg = volume_cbm * kg_per_cbm;

    PalletMeasure {
        actual_weight_kg,
        volume_cbm,
        volumetric_weight_kg,
        chargeable_weight_kg: actual_weight_kg.max(volumetric_weight_kg),
    }
}

/// Sum each pallet line (unit measure × quantity) into shipment totals
pub fn aggregate_totals(pallets: &[Pallet], kg_per_cbm: f64) -> ShipmentTotals {
    pallets.iter().fold(ShipmentTotals::default(), |mut totals, pallet| {
        let unit = measure_pallet(
            pallet.length(),
            pallet.width(),
            pallet.height(),
            pallet.weight(),
            kg_per_cbm,
        );
        let quantity = f64::from(pallet.quantity());

        totals.units += u64::from(pallet.quantity());
        totals.actual_weight_kg += unit.actual_weight_kg * quantity;
        totals.volume_cbm += unit.volume_cbm * quantity;
        totals.volumetric_weight_kg += unit.volumetric_weight_kg * quantity;
        totals.chargeable_weight_kg += unit.chargeable_weight_kg * quantity;
        totals
    })
}

/// Price the shipment totals for a destination
///
/// Fails with `UnknownDestination` before any cost is computed, so callers never see
/// a partial breakdown.
pub fn compute_total_cost(
    totals: &ShipmentTotals,
    destination: &str,
    insurance_rate: f64,
    cargo_value: f64,
    schedule: &RateSchedule,
) -> Result<CostBreakdown, QuoteError> {
    let second_leg_rate = schedule.rate_for(destination)?;

    if !insurance_rate.is_finite() || insurance_rate < 0.0 {
        return Err(QuoteError::InvalidInput(format!(
            "insurance rate must be a non-negative number (got {})",
            insurance_rate
        )));
    }
    if !cargo_value.is_finite() || cargo_value < 0.0 {
        return Err(QuoteError::InvalidInput(format!(
            "cargo value must be a non-negative number (got {})",
            cargo_value
        )));
    }

    let chargeable = totals.chargeable_weight_kg;
    let first_leg_cost = chargeable * schedule.first_leg_rate_per_kg;
    let second_leg_cost = chargeable * second_leg_rate;
    let insurance_cost = schedule.insurance_basis.premium(insurance_rate, cargo_value);
    let total_cost = first_leg_cost
        + second_leg_cost
        + schedule.customs_fee
        + schedule.transit_fee
        + schedule.handling_fee
        + insurance_cost;

    let breakdown = CostBreakdown {
        currency: schedule.currency.clone(),
        actual_weight_kg: round2(totals.actual_weight_kg),
        volume_cbm: round2(totals.volume_cbm),
        volumetric_weight_kg: round2(totals.volumetric_weight_kg),
        chargeable_weight_kg: round2(chargeable),
        first_leg_cost: round2(first_leg_cost),
        second_leg_cost: round2(second_leg_cost),
        customs_fee: round2(schedule.customs_fee),
        transit_fee: round2(schedule.transit_fee),
        handling_fee: round2(schedule.handling_fee),
        insurance_cost: round2(insurance_cost),
        total_cost: round2(total_cost),
    };

    // f64 overflow shows up as inf, which JSON cannot carry
    if breakdown.lines().iter().any(|line| !line.value.is_finite()) {
        return Err(QuoteError::InvalidInput(
            "shipment is too large to price".to_string(),
        ));
    }

    Ok(breakdown)
}

/// Full pipeline: route check, aggregation, pricing
pub fn quote(schedule: &RateSchedule, request: &QuoteRequest) -> Result<CostBreakdown, QuoteError> {
    schedule.check_origin(&request.origin)?;
    if request.pallets.is_empty() {
        return Err(QuoteError::InvalidInput(
            "at least one pallet is required".to_string(),
        ));
    }

    let totals = aggregate_totals(&request.pallets, schedule.volumetric_kg_per_cbm);
    compute_total_cost(
        &totals,
        &request.destination,
        request.insurance_rate,
        request.cargo_value,
        schedule,
    )
}
