//! Payment controller.
//!
//! Sits between the axum handlers and the use case. Each operation calls
//! the use case, maps the result and picks the status code. Errors from the
//! use case are returned exactly as received.

use axum::{Json, http::StatusCode};

use food_payments_types::{
    AppError, Page, PageRequest, PaymentOrderId, PaymentOrderResponse, PaymentRequest,
    PaymentUseCase,
};

use super::mapper::PaymentMapper;

pub struct PaymentController<U: PaymentUseCase, M: PaymentMapper> {
    use_case: U,
    mapper: M,
}

impl<U: PaymentUseCase, M: PaymentMapper> PaymentController<U, M> {
    pub fn new(use_case: U, mapper: M) -> Self {
        Self { use_case, mapper }
    }

    pub fn use_case(&self) -> &U {
        &self.use_case
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Creates a PIX QR-code payment.
    ///
    /// The amount comes from the order, the email from the CPF, in that
    /// order, and only then is the charge created with both.
    pub async fn create_payment_qr_code_pix(
        &self,
        req: PaymentRequest,
    ) -> Result<(StatusCode, Json<PaymentOrderResponse>), AppError> {
        let amount = self.use_case.get_amount_by_order_id(&req.order_id).await?;
        let email = self.use_case.get_email_by_user_cpf(&req.user_cpf).await?;
        let payment = self
            .use_case
            .create_payment_qr_code_pix(&email, &req.order_id, amount)
            .await?;

        Ok((StatusCode::OK, Json(self.mapper.to_response(&payment))))
    }

    pub async fn find_by_id(
        &self,
        id: &PaymentOrderId,
    ) -> Result<(StatusCode, Json<PaymentOrderResponse>), AppError> {
        let payment = self.use_case.find_by_id(id).await?;
        Ok((StatusCode::OK, Json(self.mapper.to_response(&payment))))
    }

    pub async fn get_payments(
        &self,
        page: PageRequest,
    ) -> Result<(StatusCode, Json<Page<PaymentOrderResponse>>), AppError> {
        let payments = self
            .use_case
            .find_all(page.offset(), page.limit())
            .await?;

        let content = payments
            .iter()
            .map(|payment| self.mapper.to_response(payment))
            .collect();

        Ok((StatusCode::OK, Json(Page::new(content, page))))
    }

    pub async fn list_payment_options(&self) -> Result<(StatusCode, Json<Vec<String>>), AppError> {
        let options = self.use_case.list_payment_options().await?;
        Ok((StatusCode::OK, Json(options)))
    }

    pub async fn delete_payment_order_by_id(
        &self,
        id: &PaymentOrderId,
    ) -> Result<StatusCode, AppError> {
        self.use_case.delete_payment_order_by_id(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
