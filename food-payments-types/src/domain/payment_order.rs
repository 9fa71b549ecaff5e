//! Payment order domain model.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier for a PaymentOrder.
///
/// New ids are UUID v4 strings, but any non-empty string coming back from
/// storage or a path segment is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "5f0c7a3e-7d8b-4a55-9d3f-1b2f3c4d5e6f")]
pub struct PaymentOrderId(String);

impl PaymentOrderId {
    /// Creates a new random PaymentOrderId.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for PaymentOrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for PaymentOrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PaymentOrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for PaymentOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Charge created, waiting for the payer
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Approved => "APPROVED",
            PaymentStatus::Rejected => "REJECTED",
            PaymentStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(PaymentStatus::Pending),
            "APPROVED" => Ok(PaymentStatus::Approved),
            "REJECTED" => Ok(PaymentStatus::Rejected),
            "CANCELLED" => Ok(PaymentStatus::Cancelled),
            other => Err(DomainError::ValidationError(format!(
                "Unknown payment status: {}",
                other
            ))),
        }
    }
}

/// Payment methods offered to customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentOption {
    Pix,
    CreditCard,
}

impl PaymentOption {
    /// Every option, in the order it is presented to clients.
    pub const ALL: [PaymentOption; 2] = [PaymentOption::Pix, PaymentOption::CreditCard];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentOption::Pix => "PIX",
            PaymentOption::CreditCard => "CREDIT_CARD",
        }
    }
}

impl std::fmt::Display for PaymentOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PIX" => Ok(PaymentOption::Pix),
            "CREDIT_CARD" => Ok(PaymentOption::CreditCard),
            other => Err(DomainError::ValidationError(format!(
                "Unknown payment option: {}",
                other
            ))),
        }
    }
}

/// A payment charged against a customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOrder {
    /// Unique identifier
    pub id: PaymentOrderId,
    /// Order this payment settles
    pub order_id: String,
    pub status: PaymentStatus,
    pub payment_option: PaymentOption,
    /// Amount charged, resolved from the order service
    pub amount: Decimal,
    /// Payment id assigned by the PIX provider
    pub integration_id: Option<String>,
    /// Idempotency key sent to the PIX provider
    pub correlation_integration_id: Option<String>,
    pub date_approved: Option<String>,
    /// RFC 3339 timestamp of the last change
    pub last_update: String,
    /// PIX copy-paste payload, rendered as a QR code by clients
    pub qr_data: Option<String>,
}

/// Largest amount a payment order can carry: 14 digits, 2 of them cents.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

/// Checks that `amount` is a positive value in cents that fits `MAX_AMOUNT`.
///
/// Trailing zeros do not count towards the scale, so `10.500` is accepted.
pub fn validate_amount(amount: Decimal) -> Result<(), DomainError> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::NonPositiveAmount);
    }
    if amount.normalize().scale() > 2 {
        return Err(DomainError::AmountPrecision);
    }
    if amount > MAX_AMOUNT {
        return Err(DomainError::AmountTooLarge);
    }
    Ok(())
}

impl PaymentOrder {
    /// Creates a new PENDING PIX payment from a charge issued by the provider.
    pub fn pending_pix(
        order_id: impl Into<String>,
        amount: Decimal,
        integration_id: String,
        correlation_integration_id: String,
        qr_data: String,
    ) -> Result<Self, DomainError> {
        validate_amount(amount)?;

        Ok(Self {
            id: PaymentOrderId::new(),
            order_id: order_id.into(),
            status: PaymentStatus::Pending,
            payment_option: PaymentOption::Pix,
            amount,
            integration_id: Some(integration_id),
            correlation_integration_id: Some(correlation_integration_id),
            date_approved: None,
            last_update: Utc::now().to_rfc3339(),
            qr_data: Some(qr_data),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_pix_creation() {
        let order = PaymentOrder::pending_pix(
            "order123",
            Decimal::new(10000, 2),
            "int123".into(),
            "corr123".into(),
            "qrdata".into(),
        )
        .unwrap();

        assert_eq!(order.status, PaymentStatus::Pending);
        assert_eq!(order.payment_option, PaymentOption::Pix);
        assert_eq!(order.order_id, "order123");
        assert_eq!(order.qr_data.as_deref(), Some("qrdata"));
        assert!(order.date_approved.is_none());
        assert!(!order.id.as_str().is_empty());
    }

    #[test]
    fn test_pending_pix_rejects_zero_amount() {
        let result = PaymentOrder::pending_pix(
            "order123",
            Decimal::ZERO,
            "int".into(),
            "corr".into(),
            "qr".into(),
        );
        assert!(matches!(result, Err(DomainError::NonPositiveAmount)));
    }

    #[test]
    fn test_max_amount() {
        assert_eq!(MAX_AMOUNT, Decimal::new(99_999_999_999_999, 2));
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(Decimal::new(1, 2)).is_ok());
        assert!(validate_amount(Decimal::new(10500, 3)).is_ok());
        assert!(validate_amount(MAX_AMOUNT).is_ok());
        assert!(matches!(
            validate_amount(Decimal::new(10005, 3)),
            Err(DomainError::AmountPrecision)
        ));
        assert!(matches!(
            validate_amount(Decimal::new(1_000_000_000_000, 0)),
            Err(DomainError::AmountTooLarge)
        ));
    }

    #[test]
    fn test_pending_pix_rejects_sub_cent_amount() {
        let result = PaymentOrder::pending_pix(
            "order123",
            Decimal::new(10005, 3),
            "int".into(),
            "corr".into(),
            "qr".into(),
        );
        assert!(matches!(result, Err(DomainError::AmountPrecision)));
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Approved,
            PaymentStatus::Rejected,
            PaymentStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<PaymentStatus>().unwrap(), status);
        }
        assert!("UNKNOWN".parse::<PaymentStatus>().is_err());
    }

    #[test]
    fn test_option_order_and_names() {
        let names: Vec<&str> = PaymentOption::ALL.iter().map(|o| o.as_str()).collect();
        assert_eq!(names, vec!["PIX", "CREDIT_CARD"]);
        assert_eq!(
            serde_json::to_string(&PaymentOption::CreditCard).unwrap(),
            "\"CREDIT_CARD\""
        );
    }
}
