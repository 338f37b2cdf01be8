use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound body for `POST /createOrder`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub name: String,
    pub desc: String,
    pub amount: f64,
    pub snapshot: Option<String>,
    pub params: Option<Value>,
}

/// Body forwarded to the gateway's `POST /order`. The descriptive fields
/// ride under `params`; `other` is an opaque bag the relay never inspects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub amount: f64,
    pub orderid: String,
    pub params: OrderParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderParams {
    pub name: String,
    pub desc: String,
    pub snapshot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<Value>,
}

impl OrderRequest {
    pub fn new(request: CreateOrderRequest, orderid: String) -> Self {
        Self {
            amount: request.amount,
            orderid,
            params: OrderParams {
                name: request.name,
                desc: request.desc,
                snapshot: request.snapshot.unwrap_or_default(),
                other: request.params,
            },
        }
    }
}

/// Order the gateway answers with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResult {
    pub amount: f64,
    // The gateway really does spell it "declmal" on the wire.
    pub declmal: u32,
    pub expire: u64,
    pub orderid: String,
    pub frontend: String,
    pub id: i64,
}
