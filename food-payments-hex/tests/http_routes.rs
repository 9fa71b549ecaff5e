//! Router-level tests.
//!
//! These drive the full axum stack with a canned use case to check routing,
//! JSON shapes and the status codes produced for each outcome.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use tower::ServiceExt;

use food_payments_hex::{DefaultPaymentMapper, inbound::HttpServer};
use food_payments_types::{
    AppError, PaymentOption, PaymentOrder, PaymentOrderId, PaymentStatus, PaymentUseCase,
};

/// Knows exactly one payment, `payment123`, for order `order123`.
struct CannedUseCase;

fn payment() -> PaymentOrder {
    PaymentOrder {
        id: PaymentOrderId::from("payment123"),
        order_id: "order123".into(),
        status: PaymentStatus::Pending,
        payment_option: PaymentOption::Pix,
        amount: Decimal::new(10000, 2),
        integration_id: Some("int123".into()),
        correlation_integration_id: Some("corr123".into()),
        date_approved: None,
        last_update: "2023-01-01T00:00:00+00:00".into(),
        qr_data: Some("qrdata".into()),
    }
}

fn not_found(id: &PaymentOrderId) -> AppError {
    AppError::NotFound(format!("Payment {}", id))
}

#[async_trait]
impl PaymentUseCase for CannedUseCase {
    async fn get_amount_by_order_id(&self, order_id: &str) -> Result<Decimal, AppError> {
        match order_id {
            "order123" => Ok(Decimal::new(10000, 2)),
            other => Err(AppError::NotFound(format!("Order {}", other))),
        }
    }

    async fn get_email_by_user_cpf(&self, _cpf: &str) -> Result<String, AppError> {
        Ok("user@email.com".into())
    }

    async fn create_payment_qr_code_pix(
        &self,
        _email: &str,
        _order_id: &str,
        _amount: Decimal,
    ) -> Result<PaymentOrder, AppError> {
        Ok(payment())
    }

    async fn find_by_id(&self, id: &PaymentOrderId) -> Result<PaymentOrder, AppError> {
        if id.as_str() == "payment123" {
            Ok(payment())
        } else {
            Err(not_found(id))
        }
    }

    async fn find_all(&self, offset: u32, _limit: u32) -> Result<Vec<PaymentOrder>, AppError> {
        if offset == 0 {
            Ok(vec![payment()])
        } else {
            Ok(vec![])
        }
    }

    async fn list_payment_options(&self) -> Result<Vec<String>, AppError> {
        Ok(vec!["PIX".into(), "CREDIT_CARD".into()])
    }

    async fn delete_payment_order_by_id(&self, id: &PaymentOrderId) -> Result<(), AppError> {
        if id.as_str() == "payment123" {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn app() -> axum::Router {
    HttpServer::new(CannedUseCase, DefaultPaymentMapper).router()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn create_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/payments/pix/qr-code")
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_payment_returns_mapped_order() {
    let response = app()
        .oneshot(create_request(
            r#"{"userCpf": "12345678900", "orderId": "order123"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["id"], "payment123");
    assert_eq!(json["orderId"], "order123");
    assert_eq!(json["status"], "PENDING");
    assert_eq!(json["paymentOption"], "PIX");
    assert_eq!(json["qrData"], "qrdata");
    assert_eq!(json["correlationIntegrationId"], "corr123");
}

#[tokio::test]
async fn test_create_payment_unknown_order_is_404() {
    let response = app()
        .oneshot(create_request(
            r#"{"userCpf": "12345678900", "orderId": "invalidOrder"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = json_body(response).await;
    assert_eq!(json["code"], 404);
    assert_eq!(json["error"], "Order invalidOrder");
}

#[tokio::test]
async fn test_create_payment_missing_field_rejected() {
    let response = app()
        .oneshot(create_request(r#"{"userCpf": "12345678900"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_find_by_id() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/payments/payment123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["integrationId"], "int123");
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/payments/nonExisting")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_payments_page() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/payments?page=0&size=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["content"].as_array().unwrap().len(), 1);
    assert_eq!(json["numberOfElements"], 1);
    assert_eq!(json["size"], 10);
    assert!(json.get("totalElements").is_none());
}

#[tokio::test]
async fn test_list_payment_options_not_shadowed_by_id_route() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/payments/options")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        serde_json::json!(["PIX", "CREDIT_CARD"])
    );
}

#[tokio::test]
async fn test_delete_returns_no_content() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/payments/payment123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_delete_missing_is_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/payments/nonExisting")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
