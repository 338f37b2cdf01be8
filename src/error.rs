use thiserror::Error;

/// Failure talking to the payment gateway, in any form: connection errors,
/// non-2xx statuses, and undecodable payloads all land here. Handlers never
/// surface these to callers; each endpoint substitutes its own fallback
/// value instead.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Gateway request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gateway returned a non-numeric balance: {0}")]
    NonNumericBalance(#[from] std::num::ParseIntError),
}
