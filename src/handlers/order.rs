use super::AppState;
use crate::models::{ApiResponse, CreateOrderRequest, OrderRequest, OrderResult};
use axum::{body::Bytes, extract::State, Json};

/// Creates a payment order on the gateway under a relay-generated id.
///
/// An id is drawn as soon as the body parses, before the gateway is asked;
/// a failed gateway call still consumes it. Gateway failures degrade to a
/// bare `{status: true}` with no `data`.
pub async fn create_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<ApiResponse<OrderResult>> {
    let request = match serde_json::from_slice::<CreateOrderRequest>(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(%err, "Discarding unreadable order body");
            return Json(ApiResponse::status(true));
        }
    };

    tracing::info!(name = %request.name, amount = request.amount, "Order creation requested");

    let orderid = state.orders.next_id();
    let outbound = OrderRequest::new(request, orderid.clone());

    match state.gateway.create_order(&outbound).await {
        Ok(mut result) => {
            // The id callers see is always the relay's, never the gateway's.
            result.orderid = orderid;
            Json(ApiResponse::ok(result))
        }
        Err(err) => {
            tracing::error!(%err, %orderid, "Gateway order creation failed");
            Json(ApiResponse::status(true))
        }
    }
}
