//! PIX provider client.
//!
//! Creates charges with `POST {base}/v1/payments`, bearer-authenticated and
//! keyed by `X-Idempotency-Key`, and reads the QR payload from
//! `point_of_interaction.transaction_data.qr_code`.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use food_payments_types::{GatewayError, PixCharge, PixChargeRequest, PixGateway};

use super::{decode, read_body, transport_error, trim_base_url};

#[derive(Debug, Serialize)]
struct ChargeBody<'a> {
    #[serde(with = "rust_decimal::serde::float")]
    transaction_amount: Decimal,
    description: String,
    payment_method_id: &'static str,
    external_reference: &'a str,
    payer: Payer<'a>,
}

#[derive(Debug, Serialize)]
struct Payer<'a> {
    email: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChargeResponse {
    id: serde_json::Value,
    point_of_interaction: PointOfInteraction,
}

#[derive(Debug, Deserialize)]
struct PointOfInteraction {
    transaction_data: TransactionData,
}

#[derive(Debug, Deserialize)]
struct TransactionData {
    qr_code: String,
}

pub struct HttpPixGateway {
    base_url: String,
    access_token: String,
    http: Client,
}

impl HttpPixGateway {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: trim_base_url(base_url),
            access_token: access_token.into(),
            http: Client::new(),
        }
    }
}

fn charge_body(req: &PixChargeRequest) -> ChargeBody<'_> {
    ChargeBody {
        transaction_amount: req.amount,
        description: format!("Order {}", req.order_id),
        payment_method_id: "pix",
        external_reference: &req.order_id,
        payer: Payer {
            email: &req.payer_email,
        },
    }
}

fn parse_charge(body: &str) -> Result<PixCharge, GatewayError> {
    let resp: ChargeResponse = decode(body)?;

    // Providers disagree on whether ids are numbers or strings.
    let integration_id = match resp.id {
        serde_json::Value::String(id) => id,
        serde_json::Value::Number(id) => id.to_string(),
        other => {
            return Err(GatewayError::InvalidResponse(format!(
                "Unexpected charge id: {}",
                other
            )));
        }
    };

    Ok(PixCharge {
        integration_id,
        qr_data: resp.point_of_interaction.transaction_data.qr_code,
    })
}

#[async_trait]
impl PixGateway for HttpPixGateway {
    #[tracing::instrument(skip_all, fields(order_id = %req.order_id, correlation_id = %req.correlation_id))]
    async fn create_qr_code(&self, req: &PixChargeRequest) -> Result<PixCharge, GatewayError> {
        let resp = self
            .http
            .post(format!("{}/v1/payments", self.base_url))
            .bearer_auth(&self.access_token)
            .header("X-Idempotency-Key", &req.correlation_id)
            .json(&charge_body(req))
            .send()
            .await
            .map_err(transport_error)?;

        let body = read_body(resp, "PIX charge").await?;
        let charge = parse_charge(&body)?;

        tracing::debug!(integration_id = %charge.integration_id, "PIX charge issued");
        Ok(charge)
    }
}
