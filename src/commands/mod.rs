//! Command implementations for the CLI
//!
//! - start: Start the quote server
//! - quote: Price a shipment and print the breakdown
//! - routes: List origins and destination rates
//! - config: Configuration display and validation

pub mod config;
pub mod quote;
pub mod routes;
pub mod start;
