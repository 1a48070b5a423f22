use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use super::AppState;
use crate::{
    error::AppError,
    freight::{self, CostBreakdown, QuoteRequest},
    metrics,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    pub quoted_at: DateTime<Utc>,
    pub origin: String,
    pub hub: String,
    pub destination: String,
    pub stackable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub breakdown: CostBreakdown,
}

/// Handle `POST /quote`
pub async fn create_quote(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = AppError::from(rejection);
            warn!(error = %error, "Rejected malformed quote request");
            metrics::record_error(error.type_name());
            return Err(error);
        }
    };

    let config = state.config.load();
    let started = Instant::now();

    let breakdown = match freight::quote(&config.rates, &request) {
        Ok(breakdown) => breakdown,
        Err(e) => {
            warn!(
                origin = %request.origin,
                destination = %request.destination,
                error = %e,
                "Quote rejected"
            );
            metrics::record_error(e.type_name());
            return Err(e.into());
        }
    };

    metrics::record_duration(started.elapsed());
    metrics::record_quote(
        &request.origin,
        &request.destination,
        breakdown.chargeable_weight_kg,
    );

    info!(
        origin = %request.origin,
        destination = %request.destination,
        pallets = request.pallets.len(),
        chargeable_kg = breakdown.chargeable_weight_kg,
        total = breakdown.total_cost,
        "Quote computed"
    );

    Ok(Json(QuoteResponse {
        quote_id: Uuid::new_v4(),
        quoted_at: Utc::now(),
        origin: request.origin,
        hub: config.rates.hub.clone(),
        destination: request.destination,
        stackable: request.stackable,
        company: request.company,
        breakdown,
    }))
}
