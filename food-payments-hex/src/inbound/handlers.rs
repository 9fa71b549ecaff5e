//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use food_payments_types::{AppError, PageRequest, PaymentOrderId, PaymentRequest, PaymentUseCase};

use super::controller::PaymentController;
use super::mapper::PaymentMapper;

/// Application state shared across handlers.
pub struct AppState<U: PaymentUseCase, M: PaymentMapper> {
    pub controller: PaymentController<U, M>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Create a PIX QR-code payment for an order.
#[tracing::instrument(skip(state, req), fields(order_id = %req.order_id))]
pub async fn create_payment_qr_code_pix<U: PaymentUseCase, M: PaymentMapper>(
    State(state): State<Arc<AppState<U, M>>>,
    Json(req): Json<PaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(state.controller.create_payment_qr_code_pix(req).await?)
}

/// Get payment by ID.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn find_by_id<U: PaymentUseCase, M: PaymentMapper>(
    State(state): State<Arc<AppState<U, M>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = PaymentOrderId::from(id);
    Ok(state.controller.find_by_id(&id).await?)
}

/// List payments one page at a time.
#[tracing::instrument(skip(state))]
pub async fn get_payments<U: PaymentUseCase, M: PaymentMapper>(
    State(state): State<Arc<AppState<U, M>>>,
    Query(page): Query<PageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(state.controller.get_payments(page).await?)
}

/// List accepted payment options.
#[tracing::instrument(skip(state))]
pub async fn list_payment_options<U: PaymentUseCase, M: PaymentMapper>(
    State(state): State<Arc<AppState<U, M>>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(state.controller.list_payment_options().await?)
}

/// Delete a payment.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn delete_payment_order_by_id<U: PaymentUseCase, M: PaymentMapper>(
    State(state): State<Arc<AppState<U, M>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = PaymentOrderId::from(id);
    Ok(state.controller.delete_payment_order_by_id(&id).await?)
}
