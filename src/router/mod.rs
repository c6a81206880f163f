use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json,
};
use log::{error, warn};
use std::sync::Arc;

use crate::di::ServiceContainer;
use crate::eligibility::eligible_chains;
use crate::entity::find_token;

// Base router trait
pub trait Router: Send + Sync {
    fn setup_routes(&self) -> axum::Router;
}

// Host endpoints backed by the service container
pub struct HttpRouter {
    services: Arc<ServiceContainer>,
}

impl HttpRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }
}

impl Router for HttpRouter {
    fn setup_routes(&self) -> axum::Router {
        axum::Router::new()
            .route("/tokens", get(get_tokens))
            .route("/chains/:token_id", get(get_chains))
            .route("/portfolio/:owner", get(get_portfolio))
            .route("/health", get(health))
            .with_state(self.services.clone())
    }
}

async fn get_tokens(State(services): State<Arc<ServiceContainer>>) -> Response {
    let prices = services.price_interactor();

    match prices.get_tokens().await {
        Ok(tokens) => Json(tokens).into_response(),
        Err(e) => {
            // The display never goes empty: serve the catalog defaults
            error!("Token price refresh failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(prices.catalog().to_vec()),
            )
                .into_response()
        }
    }
}

async fn get_chains(
    State(services): State<Arc<ServiceContainer>>,
    Path(token_id): Path<String>,
) -> Response {
    match find_token(services.tokens(), &token_id) {
        Some(token) => Json(eligible_chains(token, services.chains())).into_response(),
        None => (StatusCode::NOT_FOUND, format!("Unknown token: {}", token_id)).into_response(),
    }
}

async fn get_portfolio(
    State(services): State<Arc<ServiceContainer>>,
    Path(owner): Path<String>,
) -> Response {
    // Read-only view: the session's published snapshot is left alone
    match services.portfolio_interactor().load(&owner).await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e) => {
            warn!("Portfolio for {} unavailable: {:#}", owner, e);
            (
                StatusCode::BAD_GATEWAY,
                format!("Primary assets unavailable: {}", e),
            )
                .into_response()
        }
    }
}

async fn health() -> &'static str {
    "ok"
}
