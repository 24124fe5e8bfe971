pub mod dto;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Protocol catalog
        .route("/protocols", get(handlers::get_protocols))
        // Risk analysis
        .route("/analyze-wallet", post(handlers::analyze_wallet))
}
