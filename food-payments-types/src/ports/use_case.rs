//! Inbound port: the payment operations offered to the HTTP layer.

use rust_decimal::Decimal;

use crate::domain::{PaymentOrder, PaymentOrderId};
use crate::error::AppError;

/// Business operations behind the payment endpoints.
///
/// Errors are already in their HTTP-facing form; callers pass them on as-is.
#[async_trait::async_trait]
pub trait PaymentUseCase: Send + Sync + 'static {
    /// Amount due for an order, as recorded by the order service.
    async fn get_amount_by_order_id(&self, order_id: &str) -> Result<Decimal, AppError>;

    /// Email of the customer registered under `cpf`.
    async fn get_email_by_user_cpf(&self, cpf: &str) -> Result<String, AppError>;

    /// Issues a PIX QR code for the order and records the pending payment.
    async fn create_payment_qr_code_pix(
        &self,
        email: &str,
        order_id: &str,
        amount: Decimal,
    ) -> Result<PaymentOrder, AppError>;

    async fn find_by_id(&self, id: &PaymentOrderId) -> Result<PaymentOrder, AppError>;

    async fn find_all(&self, offset: u32, limit: u32) -> Result<Vec<PaymentOrder>, AppError>;

    /// Names of the accepted payment options, in presentation order.
    async fn list_payment_options(&self) -> Result<Vec<String>, AppError>;

    async fn delete_payment_order_by_id(&self, id: &PaymentOrderId) -> Result<(), AppError>;
}
