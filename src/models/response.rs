use serde::{Deserialize, Serialize};

/// Envelope every JSON endpoint answers with: `{status}` or `{status, data}`.
/// The gateway's own `/check` replies share this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: true,
            data: Some(data),
        }
    }

    pub fn status(status: bool) -> Self {
        Self { status, data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_status_omits_the_data_key() {
        let wire = serde_json::to_value(ApiResponse::<()>::status(true)).unwrap();
        assert_eq!(wire, json!({"status": true}));
    }

    #[test]
    fn data_rides_alongside_status() {
        let wire = serde_json::to_value(ApiResponse::ok(1234.0)).unwrap();
        assert_eq!(wire, json!({"status": true, "data": 1234.0}));
    }
}
