//! # Food Payments Types
//!
//! Domain types and port traits for the food payments service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (PaymentOrder, PaymentStatus, Cpf)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Cpf, MAX_AMOUNT, PaymentOption, PaymentOrder, PaymentOrderId, PaymentStatus, validate_amount,
};
pub use dto::*;
pub use error::{AppError, DomainError, GatewayError, RepoError};
pub use ports::{
    CustomerGateway, OrderGateway, PaymentOrderRepository, PaymentUseCase, PixCharge,
    PixChargeRequest, PixGateway,
};
