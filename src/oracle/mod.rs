pub mod config;
pub mod models;
pub mod price_service;
pub mod routes;
pub mod store;

pub use config::OracleConfig;
pub use price_service::{HttpPriceOracle, PriceOracle, QuoteFetcher};
pub use routes::{route_for, PriceSource, PRICE_ROUTES};
pub use store::PriceStore;
