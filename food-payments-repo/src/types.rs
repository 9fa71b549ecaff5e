//! Shared database row type for SQLite and PostgreSQL.
//!
//! Amounts travel as decimal text in both backends so a single row type
//! decodes either one without losing precision.

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::FromRow;

use food_payments_types::{PaymentOption, PaymentOrder, PaymentOrderId, PaymentStatus, RepoError};

/// Payment order row from database.
#[derive(FromRow)]
pub struct DbPaymentOrder {
    pub id: String,
    pub order_id: String,
    pub status: String,
    pub payment_option: String,
    pub amount: String,
    pub integration_id: Option<String>,
    pub correlation_integration_id: Option<String>,
    pub date_approved: Option<String>,
    pub last_update: String,
    pub qr_data: Option<String>,
}

impl DbPaymentOrder {
    pub fn into_domain(self) -> Result<PaymentOrder, RepoError> {
        let status = PaymentStatus::from_str(&self.status)?;
        let payment_option = PaymentOption::from_str(&self.payment_option)?;
        let amount = Decimal::from_str(&self.amount)
            .map_err(|e| RepoError::Database(format!("Invalid amount {}: {}", self.amount, e)))?;

        Ok(PaymentOrder {
            id: PaymentOrderId::from(self.id),
            order_id: self.order_id,
            status,
            payment_option,
            amount,
            integration_id: self.integration_id,
            correlation_integration_id: self.correlation_integration_id,
            date_approved: self.date_approved,
            last_update: self.last_update,
            qr_data: self.qr_data,
        })
    }
}

/// Columns selected by every read, in `DbPaymentOrder` order.
#[cfg(feature = "sqlite")]
pub const SQLITE_COLUMNS: &str = "id, order_id, status, payment_option, amount, integration_id, \
     correlation_integration_id, date_approved, last_update, qr_data";

/// Same as `SQLITE_COLUMNS`, with the NUMERIC amount rendered as text.
#[cfg(feature = "postgres")]
pub const POSTGRES_COLUMNS: &str = "id, order_id, status, payment_option, amount::TEXT AS amount, \
     integration_id, correlation_integration_id, date_approved, last_update, qr_data";
