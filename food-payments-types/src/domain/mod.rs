//! Domain models for the payment service.

pub mod customer;
pub mod payment_order;

pub use customer::Cpf;
pub use payment_order::{
    MAX_AMOUNT, PaymentOption, PaymentOrder, PaymentOrderId, PaymentStatus, validate_amount,
};
