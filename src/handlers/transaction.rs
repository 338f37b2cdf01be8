use crate::models::{ApiResponse, TransactionNotice};
use axum::{body::Bytes, Json};

/// Receives transaction-notification webhooks. The payload is logged and
/// discarded; the caller is acknowledged no matter what it sent, so the
/// body is parsed by hand instead of through an extractor that would
/// reject malformed JSON.
pub async fn notify_transaction(body: Bytes) -> Json<ApiResponse<()>> {
    match serde_json::from_slice::<TransactionNotice>(&body) {
        Ok(notice) => {
            tracing::info!(
                contract = %notice.contract,
                from = %notice.from,
                value = %notice.value,
                tx_hash = %notice.tx_hash,
                order = ?notice.order,
                "Transaction notice received"
            );
        }
        Err(err) => {
            tracing::warn!(%err, "Discarding unreadable transaction notice");
        }
    }

    Json(ApiResponse::status(true))
}
