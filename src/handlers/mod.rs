//! HTTP handlers
//!
//! - quote: `POST /quote`
//! - routes: `GET /routes`
//! - health: liveness and readiness checks
//! - metrics_handler: Prometheus scrape endpoint

pub mod health;
pub mod metrics_handler;
pub mod quote;
pub mod routes;

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::config::Config;

/// Shared handler state: the current configuration snapshot
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ArcSwap<Config>>,
}

impl AppState {
    pub fn new(config: Arc<ArcSwap<Config>>) -> Self {
        Self { config }
    }
}
