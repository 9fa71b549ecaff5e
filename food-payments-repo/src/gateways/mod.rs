//! HTTP gateway adapters.
//!
//! Each gateway talks JSON over `reqwest` and reports failures as
//! `GatewayError`: 404 becomes `NotFound`, any other failure status or
//! transport problem becomes `Unavailable`, and a body that does not
//! decode becomes `InvalidResponse`.

mod customers;
mod orders;
mod pix;

pub use customers::HttpCustomerGateway;
pub use orders::HttpOrderGateway;
pub use pix::HttpPixGateway;

use food_payments_types::GatewayError;
use reqwest::StatusCode;

fn trim_base_url(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}

/// Reads a successful response body, or classifies the failure.
async fn read_body(resp: reqwest::Response, what: &str) -> Result<String, GatewayError> {
    let status = resp.status();

    if status == StatusCode::NOT_FOUND {
        return Err(GatewayError::NotFound(what.to_string()));
    }

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(%status, body = %body, "{} request failed", what);
        return Err(GatewayError::Unavailable(format!(
            "{} returned {}",
            what, status
        )));
    }

    resp.text()
        .await
        .map_err(|e| GatewayError::Unavailable(e.to_string()))
}

fn transport_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Unavailable(err.to_string())
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, GatewayError> {
    serde_json::from_str(body).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_base_url() {
        assert_eq!(trim_base_url("http://orders:8080/"), "http://orders:8080");
        assert_eq!(trim_base_url("http://orders:8080"), "http://orders:8080");
    }

    #[test]
    fn test_decode_error_is_invalid_response() {
        let result: Result<serde_json::Value, _> = decode("not json");
        assert!(matches!(result, Err(GatewayError::InvalidResponse(_))));
    }
}
