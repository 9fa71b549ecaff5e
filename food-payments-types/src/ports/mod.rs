//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod gateway;
mod repository;
mod use_case;

pub use gateway::{CustomerGateway, OrderGateway, PixCharge, PixChargeRequest, PixGateway};
pub use repository::PaymentOrderRepository;
pub use use_case::PaymentUseCase;
