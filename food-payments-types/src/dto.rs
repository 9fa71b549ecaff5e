//! Data Transfer Objects (DTOs) for requests and responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{PaymentOption, PaymentOrderId, PaymentStatus};

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a PIX QR-code payment for an order.
///
/// The amount is deliberately absent: it is always looked up from the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// CPF of the paying customer
    #[schema(example = "12345678900")]
    pub user_cpf: String,
    /// Order being paid
    #[schema(example = "order123")]
    pub order_id: String,
}

impl PaymentRequest {
    pub fn new(user_cpf: impl Into<String>, order_id: impl Into<String>) -> Self {
        Self {
            user_cpf: user_cpf.into(),
            order_id: order_id.into(),
        }
    }
}

/// Read-only view of a payment order returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrderResponse {
    pub id: PaymentOrderId,
    /// PIX copy-paste payload
    pub qr_data: Option<String>,
    pub integration_id: Option<String>,
    pub correlation_integration_id: Option<String>,
    #[schema(example = "order123")]
    pub order_id: String,
    pub date_approved: Option<String>,
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub last_update: String,
    pub status: PaymentStatus,
    pub payment_option: PaymentOption,
    #[schema(value_type = String, example = "100.00")]
    pub amount: Decimal,
}

// ─────────────────────────────────────────────────────────────────────────────
// Pagination
// ─────────────────────────────────────────────────────────────────────────────

/// Largest page a client may ask for.
pub const MAX_PAGE_SIZE: u32 = 100;

const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page selection taken from the query string (`?page=0&size=20`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct PageRequest {
    /// Zero-based page number
    pub page: u32,
    /// Elements per page (capped at 100)
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn of(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Number of elements to return.
    pub fn limit(&self) -> u32 {
        self.size.min(MAX_PAGE_SIZE)
    }

    /// Number of elements to skip.
    pub fn offset(&self) -> u32 {
        self.page.saturating_mul(self.limit())
    }
}

/// One page of results.
///
/// Carries only the batch that was returned; there is no total count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page number that was requested
    pub page: u32,
    /// Page size applied (capped at 100)
    pub size: u32,
    /// Elements actually present in `content`
    pub number_of_elements: usize,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest) -> Self {
        let number_of_elements = content.len();
        Self {
            content,
            page: request.page,
            size: request.limit(),
            number_of_elements,
        }
    }
}
