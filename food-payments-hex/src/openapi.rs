//! OpenAPI document and Swagger UI wiring.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use food_payments_types::domain::{PaymentOption, PaymentOrderId, PaymentStatus};
use food_payments_types::dto::{PageRequest, PaymentOrderResponse, PaymentRequest};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Create a PIX QR-code payment
///
/// The amount is taken from the order service and the payer email from the
/// customer service; neither is accepted from the client.
#[utoipa::path(
    post,
    path = "/api/payments/pix/qr-code",
    tag = "payments",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "QR code created", body = PaymentOrderResponse),
        (status = 400, description = "Invalid CPF or order"),
        (status = 404, description = "Order or customer not found"),
        (status = 502, description = "PIX provider unavailable")
    )
)]
async fn create_payment_qr_code_pix() {}

/// List payments
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "payments",
    params(PageRequest),
    responses(
        (status = 200, description = "One page of payments", body = inline(serde_json::Value)),
        (status = 400, description = "Invalid page size")
    )
)]
async fn get_payments() {}

/// List payment options
#[utoipa::path(
    get,
    path = "/api/payments/options",
    tag = "payments",
    responses(
        (status = 200, description = "Accepted payment options", body = Vec<String>, example = json!(["PIX", "CREDIT_CARD"]))
    )
)]
async fn list_payment_options() {}

/// Get payment by ID
#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = "payments",
    params(
        ("id" = String, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment details", body = PaymentOrderResponse),
        (status = 404, description = "Payment not found")
    )
)]
async fn find_by_id() {}

/// Delete a payment
#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    tag = "payments",
    params(
        ("id" = String, Path, description = "Payment ID")
    ),
    responses(
        (status = 204, description = "Payment deleted"),
        (status = 404, description = "Payment not found")
    )
)]
async fn delete_payment_order_by_id() {}

/// OpenAPI documentation for the Payments API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Food Payments API",
        version = "1.0.0",
        description = "PIX QR-code payments for food orders.",
        license(name = "MIT"),
    ),
    paths(
        health,
        create_payment_qr_code_pix,
        get_payments,
        list_payment_options,
        find_by_id,
        delete_payment_order_by_id,
    ),
    components(
        schemas(
            PaymentRequest,
            PaymentOrderResponse,
            PaymentOrderId,
            PaymentStatus,
            PaymentOption,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment creation, lookup and removal"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_payment_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| *p == "/api/payments/pix/qr-code"));
        assert!(paths.iter().any(|p| *p == "/api/payments/{id}"));
        assert!(paths.iter().any(|p| *p == "/api/payments/options"));
    }
}
