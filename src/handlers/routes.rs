use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::freight::DestinationRate;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutesResponse {
    pub hub: String,
    pub origins: Vec<String>,
    pub destinations: Vec<DestinationRate>,
    pub first_leg_rate_per_kg: f64,
    pub currency: String,
}

/// Handle `GET /routes`
/// Lists the pickup cities and destination rates the input collector may offer
pub async fn list_routes(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config.load();
    let rates = &config.rates;

    Json(RoutesResponse {
        hub: rates.hub.clone(),
        origins: rates.origins.clone(),
        destinations: rates.destinations.clone(),
        first_leg_rate_per_kg: rates.first_leg_rate_per_kg,
        currency: rates.currency.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use arc_swap::ArcSwap;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_routes() {
        let state = AppState::new(Arc::new(ArcSwap::from_pointee(Config::default())));
        let response = list_routes(State(state)).await.into_response();

        assert_eq!(response.status(), 200);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let routes: RoutesResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(routes.hub, "Khorgos, Kazakhstan");
        assert!(routes.origins.contains(&"Yiwu, China".to_string()));
        assert_eq!(routes.destinations[0].name, "Baku, Azerbaijan");
    }
}
