//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

mod controller;
mod handlers;
mod mapper;
mod server;


pub use controller::PaymentController;
pub use handlers::{ApiError, AppState};
pub use mapper::{DefaultPaymentMapper, PaymentMapper};
pub use server::HttpServer;
