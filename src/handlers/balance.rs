use super::AppState;
use crate::models::ApiResponse;
use axum::{extract::State, Json};

/// Relays the gateway's wallet balance, already normalized by its decimal
/// precision. This endpoint fails closed: any gateway trouble reads as
/// `{status: false}`.
pub async fn get_balance(State(state): State<AppState>) -> Json<ApiResponse<f64>> {
    match state.gateway.balance().await {
        Ok(value) => Json(ApiResponse::ok(value)),
        Err(err) => {
            tracing::error!(%err, "Balance lookup failed");
            Json(ApiResponse::status(false))
        }
    }
}
