//! Ports for the services this one calls out to.
//!
//! Implementations are HTTP clients in production and fakes in tests.

use rust_decimal::Decimal;

use crate::domain::Cpf;
use crate::error::GatewayError;

/// Order service: source of truth for what an order costs.
#[async_trait::async_trait]
pub trait OrderGateway: Send + Sync + 'static {
    /// Total amount due for the order.
    async fn amount_by_order_id(&self, order_id: &str) -> Result<Decimal, GatewayError>;
}

/// Customer service: resolves customer contact data.
#[async_trait::async_trait]
pub trait CustomerGateway: Send + Sync + 'static {
    async fn email_by_cpf(&self, cpf: &Cpf) -> Result<String, GatewayError>;
}

/// Charge to be issued by the PIX provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PixChargeRequest {
    pub payer_email: String,
    pub order_id: String,
    pub amount: Decimal,
    /// Idempotency key; the provider returns the same charge for a repeated key
    pub correlation_id: String,
}

/// Charge issued by the PIX provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PixCharge {
    /// Provider-side payment id
    pub integration_id: String,
    /// Copy-paste payload behind the QR code
    pub qr_data: String,
}

/// PIX provider port.
#[async_trait::async_trait]
pub trait PixGateway: Send + Sync + 'static {
    async fn create_qr_code(&self, req: &PixChargeRequest) -> Result<PixCharge, GatewayError>;
}
