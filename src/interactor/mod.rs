pub mod portfolio_interactor;
pub mod price_interactor;
pub mod swap_interactor;

pub use portfolio_interactor::{aggregate, ExtraToken, PortfolioInteractor, PortfolioInteractorImpl};
pub use price_interactor::{merge_quotes, PriceInteractor, PriceInteractorImpl};
pub use swap_interactor::{SwapInteractor, SwapOrchestrator};
