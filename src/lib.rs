//! Core of a cross-chain Universal Account swap tool.
//!
//! The library is the entry point for swaps: build a container with
//! [`create_application`], then drive connect, refresh and swap events through
//! [`ServiceContainer::spawn_session`]. The bundled binary only hosts read paths.
pub mod config;
pub mod di;
pub mod eligibility;
pub mod entity;
pub mod evm;
pub mod interactor;
pub mod oracle;
pub mod router;
pub mod services;
pub mod universal;
pub mod utils;

use anyhow::Result;
use std::sync::Arc;

// Re-export commonly used items
pub use config::*;
pub use di::*;
pub use eligibility::*;
pub use entity::*;
pub use interactor::*;
pub use router::*;
pub use services::*;
pub use utils::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wires the services and returns the host router, the container and the
/// background price refresh service.
pub fn create_application(
    config: AppConfig,
) -> Result<(HttpRouter, Arc<ServiceContainer>, PriceRefreshService)> {
    let services = Arc::new(ServiceContainer::new(config)?);
    let router = HttpRouter::new(services.clone());
    let price_refresh_service = services.price_refresh_service();

    Ok((router, services, price_refresh_service))
}
