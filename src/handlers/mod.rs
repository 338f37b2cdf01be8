use crate::services::{GatewayClient, OrderSequence};
use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::{path::Path, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub mod balance;
pub mod check;
pub mod order;
pub mod pay;
pub mod transaction;

pub use balance::*;
pub use check::*;
pub use order::*;
pub use pay::*;
pub use transaction::*;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<GatewayClient>,
    pub orders: Arc<OrderSequence>,
}

/// Query shape shared by `/pay` and `/check`. A missing `order` parameter is
/// forwarded as an empty string rather than rejected.
#[derive(Debug, Deserialize)]
pub struct OrderQuery {
    #[serde(default)]
    pub order: String,
}

/// Builds the relay router: five API routes, static assets for everything
/// else.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/transaction", post(notify_transaction))
        .route("/createOrder", post(create_order))
        .route("/balance", get(get_balance))
        .route("/pay", get(pay_page))
        .route("/check", get(check_order))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
}
