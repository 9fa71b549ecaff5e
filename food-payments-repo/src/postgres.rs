//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use food_payments_types::{PaymentOrder, PaymentOrderId, PaymentOrderRepository, RepoError};

use crate::types::{DbPaymentOrder, POSTGRES_COLUMNS};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_payment_orders_pg.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl PaymentOrderRepository for PostgresRepo {
    async fn save(&self, order: &PaymentOrder) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO payment_orders
                (id, order_id, status, payment_option, amount, integration_id,
                 correlation_integration_id, date_approved, last_update, qr_data)
            VALUES ($1, $2, $3, $4, $5::NUMERIC, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                order_id = EXCLUDED.order_id,
                status = EXCLUDED.status,
                payment_option = EXCLUDED.payment_option,
                amount = EXCLUDED.amount,
                integration_id = EXCLUDED.integration_id,
                correlation_integration_id = EXCLUDED.correlation_integration_id,
                date_approved = EXCLUDED.date_approved,
                last_update = EXCLUDED.last_update,
                qr_data = EXCLUDED.qr_data
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
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &PaymentOrderId) -> Result<Option<PaymentOrder>, RepoError> {
        let sql = format!(
            "SELECT {} FROM payment_orders WHERE id = $1",
            POSTGRES_COLUMNS
        );

        let row: Option<DbPaymentOrder> = sqlx::query_as(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbPaymentOrder::into_domain).transpose()
    }

    async fn find_all(&self, offset: u32, limit: u32) -> Result<Vec<PaymentOrder>, RepoError> {
        let sql = format!(
            "SELECT {} FROM payment_orders ORDER BY created_at ASC, id ASC LIMIT $1 OFFSET $2",
            POSTGRES_COLUMNS
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
        let result = sqlx::query("DELETE FROM payment_orders WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
