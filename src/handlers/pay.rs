use super::{AppState, OrderQuery};
use axum::{
    extract::{Query, State},
    response::Html,
};

/// Relays the gateway's payment page for an order, byte for byte. On
/// gateway failure the page degrades to an empty document, still 200 and
/// `text/html`, so the front-end shows a blank frame instead of an error.
pub async fn pay_page(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> Html<String> {
    match state.gateway.pay_page(&query.order).await {
        Ok(page) => Html(page),
        Err(err) => {
            tracing::error!(%err, order = %query.order, "Payment page fetch failed");
            Html(String::new())
        }
    }
}
