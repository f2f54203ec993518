use crate::config::ServiceConfig;
use crate::domain::amount::parse_amount;
use crate::domain::payment_type::PaymentType;
use crate::domain::ports::PricingService;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Pricing service reached over HTTP.
///
/// * `GET  {base}/payment/types` returns a JSON array of tags.
/// * `POST {base}/payment/pay?paymentType=..&amount=..` returns the total as plain text.
///
/// `Clone` shares the underlying connection pool.
#[derive(Clone)]
pub struct HttpPricingService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPricingService {
    /// Builds a client honouring the configured request timeout, if any.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    async fn read_body(response: reqwest::Response, endpoint: &str) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(PaymentError::PricingService(format!(
                "{endpoint} returned status {status}"
            )));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl PricingService for HttpPricingService {
    async fn payment_types(&self) -> Result<Vec<String>> {
        let url = format!("{}/payment/types", self.base_url);
        tracing::debug!(%url, "fetching payment types");

        let response = self.client.get(&url).send().await?;
        let body = Self::read_body(response, "/payment/types").await?;

        serde_json::from_str(&body).map_err(|e| {
            PaymentError::PricingService(format!("invalid response from /payment/types: {e}"))
        })
    }

    async fn pay(&self, payment_type: PaymentType, amount: Decimal) -> Result<Decimal> {
        let url = format!("{}/payment/pay", self.base_url);
        tracing::debug!(%url, %payment_type, %amount, "requesting total");

        let response = self
            .client
            .post(&url)
            .query(&[
                ("paymentType", payment_type.as_tag().to_string()),
                ("amount", amount.to_string()),
            ])
            .send()
            .await?;
        let body = Self::read_body(response, "/payment/pay").await?;

        parse_amount(&body).map_err(|_| {
            PaymentError::PricingService(format!(
                "invalid response from /payment/pay: {:?}",
                body.trim()
            ))
        })
    }
}
