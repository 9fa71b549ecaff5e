//! Domain-to-response mapping.

use food_payments_types::{PaymentOrder, PaymentOrderResponse};

/// Translates domain payment orders into API responses.
pub trait PaymentMapper: Send + Sync + 'static {
    fn to_response(&self, order: &PaymentOrder) -> PaymentOrderResponse;
}

/// Field-for-field mapper used by the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPaymentMapper;

impl PaymentMapper for DefaultPaymentMapper {
    fn to_response(&self, order: &PaymentOrder) -> PaymentOrderResponse {
        PaymentOrderResponse {
            id: order.id.clone(),
            qr_data: order.qr_data.clone(),
            integration_id: order.integration_id.clone(),
            correlation_integration_id: order.correlation_integration_id.clone(),
            order_id: order.order_id.clone(),
            date_approved: order.date_approved.clone(),
            last_update: order.last_update.clone(),
            status: order.status,
            payment_option: order.payment_option,
            amount: order.amount,
        }
    }
}
