//! # Food Payments Hex
//!
//! Application service layer and HTTP adapter for the payments service.
//!
//! ## Architecture
//!
//! - `service` - Application service, the `PaymentUseCase` implementation
//! - `inbound` - HTTP adapter (controller, mapper, Axum server)
//! - `openapi` - OpenAPI document served by the HTTP adapter
//!
//! The service is generic over its repository and gateway ports, and the
//! controller is generic over `U: PaymentUseCase` and `M: PaymentMapper`,
//! so every layer can be driven by test doubles.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use inbound::{DefaultPaymentMapper, PaymentController, PaymentMapper};
pub use service::PaymentService;
