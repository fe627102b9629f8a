use crate::{
    abstract_trait::payment::PaymentGatewayClientTrait,
    client::create_client,
    domain::requests::payment::PaymentProviderQuery,
    errors::FetchError,
    model::PaymentEnvelope,
};
use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

/// HTTP client for the payment gateway's transaction ledger.
pub struct PaymentGatewayClient {
    base_url: String,
    client: Client,
}

impl PaymentGatewayClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        Self {
            base_url,
            client: create_client(timeout_secs),
        }
    }
}

#[async_trait]
impl PaymentGatewayClientTrait for PaymentGatewayClient {
    async fn fetch_payments(
        &self,
        query: &PaymentProviderQuery,
    ) -> Result<PaymentEnvelope, FetchError> {
        let mut params: Vec<(&str, String)> = vec![
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(status) = query.status {
            params.push(("status", status.as_str().to_string()));
        }

        info!("📡 GET {}/payments page={}", self.base_url, query.page);

        let response = self
            .client
            .get(format!("{}/payments", self.base_url))
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let envelope = match response.json::<PaymentEnvelope>().await {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(FetchError::Provider(format!(
                    "payment gateway returned {status}"
                )));
            }
            Err(err) => return Err(FetchError::Transport(err)),
        };

        if !envelope.success {
            return Err(FetchError::Provider(
                envelope
                    .error
                    .unwrap_or_else(|| "payment gateway reported failure".to_string()),
            ));
        }

        Ok(envelope)
    }
}
