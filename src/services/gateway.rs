use crate::{
    error::GatewayError,
    models::{ApiResponse, Balance, OrderRequest, OrderResult},
};
use serde_json::Value;

/// Outbound client for the payment gateway. One instance is shared by all
/// handlers; the underlying `reqwest::Client` pools connections itself.
pub struct GatewayClient {
    base_url: String,
    client: reqwest::Client,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Current wallet balance, scaled down by the gateway's decimal precision.
    pub async fn balance(&self) -> Result<f64, GatewayError> {
        let payload: Balance = self
            .client
            .get(format!("{}/balance", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!(raw = %payload.balance, decimal = payload.decimal, "Gateway balance");

        Ok(payload.normalized()?)
    }

    pub async fn create_order(&self, order: &OrderRequest) -> Result<OrderResult, GatewayError> {
        let result: OrderResult = self
            .client
            .post(format!("{}/order", self.base_url))
            .json(order)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::info!(
            orderid = %order.orderid,
            frontend = %result.frontend,
            "Gateway accepted order"
        );

        Ok(result)
    }

    /// Whether the given order is still payable according to the gateway.
    pub async fn check(&self, orderid: &str) -> Result<bool, GatewayError> {
        let reply: ApiResponse<Value> = self
            .client
            .get(format!("{}/check", self.base_url))
            .query(&[("order", orderid)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(reply.status)
    }

    /// Payment page HTML for the given order, relayed verbatim.
    pub async fn pay_page(&self, orderid: &str) -> Result<String, GatewayError> {
        let page = self
            .client
            .get(format!("{}/pay", self.base_url))
            .query(&[("order", orderid)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_the_base_url() {
        let client = GatewayClient::new("http://localhost:9110/");
        assert_eq!(client.base_url, "http://localhost:9110");
    }
}
