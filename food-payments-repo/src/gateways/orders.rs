//! Order service client.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use food_payments_types::{GatewayError, OrderGateway};

use super::{decode, read_body, transport_error, trim_base_url};

/// Subset of the order resource this service needs.
#[derive(Debug, Deserialize)]
struct OrderBody {
    amount: Decimal,
}

/// Looks up order totals with `GET {base}/orders/{order_id}`.
pub struct HttpOrderGateway {
    base_url: String,
    http: Client,
}

impl HttpOrderGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base_url(base_url),
            http: Client::new(),
        }
    }

    fn order_url(&self, order_id: &str) -> String {
        format!("{}/orders/{}", self.base_url, order_id)
    }
}

fn parse_amount(body: &str) -> Result<Decimal, GatewayError> {
    decode::<OrderBody>(body).map(|order| order.amount)
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    #[tracing::instrument(skip(self))]
    async fn amount_by_order_id(&self, order_id: &str) -> Result<Decimal, GatewayError> {
        let resp = self
            .http
            .get(self.order_url(order_id))
            .send()
            .await
            .map_err(transport_error)?;

        let body = read_body(resp, &format!("Order {}", order_id)).await?;
        parse_amount(&body)
    }
}
