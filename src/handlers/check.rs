use super::{AppState, OrderQuery};
use crate::models::ApiResponse;
use axum::{
    extract::{Query, State},
    Json,
};

/// Relays the gateway's verdict on whether an order is still payable. This
/// endpoint fails open: a `false` status makes the front-end payment page
/// close itself, so gateway errors read as still-pending instead.
pub async fn check_order(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> Json<ApiResponse<()>> {
    let status = match state.gateway.check(&query.order).await {
        Ok(status) => status,
        Err(err) => {
            tracing::error!(%err, order = %query.order, "Order check failed");
            true
        }
    };

    Json(ApiResponse::status(status))
}
