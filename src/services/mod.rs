pub mod price_refresh_service;
pub mod session_service;

pub use price_refresh_service::PriceRefreshService;
pub use session_service::{SessionEvent, SessionService};
