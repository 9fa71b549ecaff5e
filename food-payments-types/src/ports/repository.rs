//! Repository port trait.
//!
//! Adapters (Postgres, SQLite) implement this trait.

use crate::domain::{PaymentOrder, PaymentOrderId};
use crate::error::RepoError;

/// Persistence port for payment orders.
#[async_trait::async_trait]
pub trait PaymentOrderRepository: Send + Sync + 'static {
    /// Inserts the order, or replaces the stored one with the same id.
    async fn save(&self, order: &PaymentOrder) -> Result<(), RepoError>;

    /// Gets a payment order by ID.
    async fn find_by_id(&self, id: &PaymentOrderId) -> Result<Option<PaymentOrder>, RepoError>;

    /// Lists payment orders in creation order, skipping `offset` and
    /// returning at most `limit`.
    async fn find_all(&self, offset: u32, limit: u32) -> Result<Vec<PaymentOrder>, RepoError>;

    /// Deletes a payment order. Returns false when nothing matched.
    async fn delete_by_id(&self, id: &PaymentOrderId) -> Result<bool, RepoError>;
}
