use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound webhook body for `POST /transaction`. Logged and discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionNotice {
    pub contract: String,
    pub from: String,
    pub value: String,
    #[serde(rename = "txHash")]
    pub tx_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderInfo {
    pub id: String,
    pub amount: f64,
    pub orderid: String,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_parses_with_and_without_order() {
        let bare = r#"{
            "contract": "0xabc",
            "from": "0xdef",
            "value": "1000",
            "txHash": "0x123"
        }"#;
        let notice: TransactionNotice = serde_json::from_str(bare).unwrap();
        assert_eq!(notice.tx_hash, "0x123");
        assert!(notice.order.is_none());

        let with_order = r#"{
            "contract": "0xabc",
            "from": "0xdef",
            "value": "1000",
            "txHash": "0x123",
            "order": {
                "id": "pay-7",
                "amount": 12.5,
                "orderid": "202608061",
                "created_at": 1754400000,
                "params": {"color": "red", "size": "L"}
            }
        }"#;
        let notice: TransactionNotice = serde_json::from_str(with_order).unwrap();
        let order = notice.order.unwrap();
        assert_eq!(order.orderid, "202608061");
        assert!(order.params.is_some());
    }
}
