//! Customer service client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use food_payments_types::{Cpf, CustomerGateway, GatewayError};

use super::{decode, read_body, transport_error, trim_base_url};

#[derive(Debug, Deserialize)]
struct CustomerBody {
    email: Option<String>,
}

/// Resolves customers with `GET {base}/customers/{cpf}`.
pub struct HttpCustomerGateway {
    base_url: String,
    http: Client,
}

impl HttpCustomerGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base_url(base_url),
            http: Client::new(),
        }
    }

    fn customer_url(&self, cpf: &Cpf) -> String {
        format!("{}/customers/{}", self.base_url, cpf)
    }
}

fn parse_email(body: &str) -> Result<String, GatewayError> {
    decode::<CustomerBody>(body)?
        .email
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| GatewayError::InvalidResponse("Customer has no email".into()))
}

#[async_trait]
impl CustomerGateway for HttpCustomerGateway {
    #[tracing::instrument(skip_all)]
    async fn email_by_cpf(&self, cpf: &Cpf) -> Result<String, GatewayError> {
        let resp = self
            .http
            .get(self.customer_url(cpf))
            .send()
            .await
            .map_err(transport_error)?;

        let body = read_body(resp, "Customer").await?;
        parse_email(&body)
    }
}
