//! Payment Application Service
//!
//! Orchestrates domain operations through the repository and gateway ports.
//! Contains NO infrastructure logic - pure business orchestration.

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use food_payments_types::{
    AppError, Cpf, CustomerGateway, OrderGateway, PaymentOption, PaymentOrder, PaymentOrderId,
    PaymentOrderRepository, PaymentUseCase, PixChargeRequest, PixGateway, validate_amount,
};

/// Application service for payment operations.
///
/// Generic over every port - adapters are injected at compile time.
/// This enables:
/// - Swapping repositories and gateways without code changes
/// - Testing with in-memory fakes
/// - Compile-time checks for port implementation
pub struct PaymentService<R, O, C, P>
where
    R: PaymentOrderRepository,
    O: OrderGateway,
    C: CustomerGateway,
    P: PixGateway,
{
    repo: R,
    orders: O,
    customers: C,
    pix: P,
}

impl<R, O, C, P> PaymentService<R, O, C, P>
where
    R: PaymentOrderRepository,
    O: OrderGateway,
    C: CustomerGateway,
    P: PixGateway,
{
    /// Creates a new payment service with the given adapters.
    pub fn new(repo: R, orders: O, customers: C, pix: P) -> Self {
        Self {
            repo,
            orders,
            customers,
            pix,
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }
}

#[async_trait]
impl<R, O, C, P> PaymentUseCase for PaymentService<R, O, C, P>
where
    R: PaymentOrderRepository,
    O: OrderGateway,
    C: CustomerGateway,
    P: PixGateway,
{
    // ─────────────────────────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────────────────────────

    #[tracing::instrument(skip(self))]
    async fn get_amount_by_order_id(&self, order_id: &str) -> Result<Decimal, AppError> {
        if order_id.trim().is_empty() {
            return Err(AppError::BadRequest("Order ID cannot be empty".into()));
        }

        let amount = self.orders.amount_by_order_id(order_id).await?;

        if amount <= Decimal::ZERO {
            return Err(AppError::BadRequest(format!(
                "Order {} has no amount due",
                order_id
            )));
        }
        validate_amount(amount)?;

        Ok(amount)
    }

    #[tracing::instrument(skip_all)]
    async fn get_email_by_user_cpf(&self, cpf: &str) -> Result<String, AppError> {
        let cpf = Cpf::parse(cpf)?;
        let email = self.customers.email_by_cpf(&cpf).await?;
        Ok(email)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment Operations
    // ─────────────────────────────────────────────────────────────────────────────

    #[tracing::instrument(skip(self, email), fields(amount = %amount))]
    async fn create_payment_qr_code_pix(
        &self,
        email: &str,
        order_id: &str,
        amount: Decimal,
    ) -> Result<PaymentOrder, AppError> {
        if email.trim().is_empty() {
            return Err(AppError::BadRequest("Payer email cannot be empty".into()));
        }
        if order_id.trim().is_empty() {
            return Err(AppError::BadRequest("Order ID cannot be empty".into()));
        }
        validate_amount(amount)?;

        let charge_req = PixChargeRequest {
            payer_email: email.to_string(),
            order_id: order_id.to_string(),
            amount,
            correlation_id: Uuid::new_v4().to_string(),
        };

        let charge = self.pix.create_qr_code(&charge_req).await?;

        let payment = PaymentOrder::pending_pix(
            order_id,
            amount,
            charge.integration_id,
            charge_req.correlation_id,
            charge.qr_data,
        )?;

        // The charge already exists at the provider; keep its keys in the log.
        if let Err(e) = self.repo.save(&payment).await {
            tracing::error!(
                error = %e,
                integration_id = payment.integration_id.as_deref().unwrap_or_default(),
                correlation_id = payment.correlation_integration_id.as_deref().unwrap_or_default(),
                "PIX charge issued but payment could not be saved"
            );
            return Err(e.into());
        }

        tracing::info!(payment_id = %payment.id, "PIX payment created");
        Ok(payment)
    }

    #[tracing::instrument(skip(self), fields(payment_id = %id))]
    async fn find_by_id(&self, id: &PaymentOrderId) -> Result<PaymentOrder, AppError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound(format!("Payment {}", id))))
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self, offset: u32, limit: u32) -> Result<Vec<PaymentOrder>, AppError> {
        if limit == 0 {
            return Err(AppError::BadRequest("Page size must be positive".into()));
        }

        self.repo.find_all(offset, limit).await.map_err(Into::into)
    }

    async fn list_payment_options(&self) -> Result<Vec<String>, AppError> {
        Ok(PaymentOption::ALL
            .iter()
            .map(|option| option.as_str().to_string())
            .collect())
    }

    #[tracing::instrument(skip(self), fields(payment_id = %id))]
    async fn delete_payment_order_by_id(&self, id: &PaymentOrderId) -> Result<(), AppError> {
        let deleted = self.repo.delete_by_id(id).await?;

        if !deleted {
            return Err(AppError::NotFound(format!("Payment {}", id)));
        }

        tracing::info!("Payment deleted");
        Ok(())
    }
}
