//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use food_payments_types::{PaymentOrder, PaymentOrderId, PaymentOrderRepository, RepoError};

use crate::types::{DbPaymentOrder, SQLITE_COLUMNS};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let repo = Self { pool };
        repo.create_schema().await?;

        Ok(repo)
    }

    /// Creates the database schema (idempotent).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_payment_orders.sql");
        for statement in ddl.split(';') {
            let stmt = statement.trim();
            if !stmt.is_empty() {
                sqlx::query(stmt)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| RepoError::Database(e.to_string()))?;
            }
        }

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentOrderRepository for SqliteRepo {
    async fn save(&self, order: &PaymentOrder) -> Result<(), RepoError> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true);

        sqlx::query(
            r#"
            INSERT INTO payment_orders
                (id, order_id, status, payment_option, amount, integration_id,
                 correlation_integration_id, date_approved, last_update, qr_data, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                order_id = excluded.order_id,
                status = excluded.status,
                payment_option = excluded.payment_option,
                amount = excluded.amount,
                integration_id = excluded.integration_id,
                correlation_integration_id = excluded.correlation_integration_id,
                date_approved = excluded.date_approved,
                last_update = excluded.last_update,
                qr_data = excluded.qr_data
            "#,
        )
        .bind(order.id.as_str())
        .bind(&order.order_id)
        .bind(order.status.as_str())
        .bind(order.payment_option.as_str())
        .bind(order.amount.to_string())
        .bind(&order.integration_id)
        .bind(&order.correlation_integration_id)
        .bind(&order.date_approved)
        .bind(&order.last_update)
        .bind(&order.qr_data)
        .bind(&created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &PaymentOrderId) -> Result<Option<PaymentOrder>, RepoError> {
        let sql = format!("SELECT {} FROM payment_orders WHERE id = ?", SQLITE_COLUMNS);

        let row: Option<DbPaymentOrder> = sqlx::query_as(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbPaymentOrder::into_domain).transpose()
    }

    async fn find_all(&self, offset: u32, limit: u32) -> Result<Vec<PaymentOrder>, RepoError> {
        let sql = format!(
            "SELECT {} FROM payment_orders ORDER BY created_at ASC, id ASC LIMIT ? OFFSET ?",
            SQLITE_COLUMNS
        );

        let rows: Vec<DbPaymentOrder> = sqlx::query_as(&sql)
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbPaymentOrder::into_domain).collect()
    }

    async fn delete_by_id(&self, id: &PaymentOrderId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM payment_orders WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
