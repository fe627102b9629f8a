use crate::{
    abstract_trait::withdraw::WithdrawalClientTrait,
    client::create_client,
    errors::FetchError,
    model::{WithdrawEnvelope, WithdrawTicketRecord},
};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::info;

/// HTTP client for the withdrawal collaborator. Fire-and-forget: the
/// submitted ticket stays pending until an external system resolves it.
pub struct WithdrawalClient {
    base_url: String,
    client: Client,
}

impl WithdrawalClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        Self {
            base_url,
            client: create_client(timeout_secs),
        }
    }
}

#[async_trait]
impl WithdrawalClientTrait for WithdrawalClient {
    async fn submit(&self, amount: f64) -> Result<WithdrawTicketRecord, FetchError> {
        info!("📡 POST {}/withdrawals amount={amount}", self.base_url);

        let response = self
            .client
            .post(format!("{}/withdrawals", self.base_url))
            .json(&json!({ "amount": amount }))
            .send()
            .await?;

        let status = response.status();
        let envelope = match response.json::<WithdrawEnvelope>().await {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(FetchError::Provider(format!(
                    "withdrawal collaborator returned {status}"
                )));
            }
            Err(err) => return Err(FetchError::Transport(err)),
        };

        if !envelope.success {
            return Err(FetchError::Provider(
                envelope
                    .error
                    .unwrap_or_else(|| "withdrawal collaborator reported failure".to_string()),
            ));
        }

        envelope.ticket.ok_or_else(|| {
            FetchError::Provider("withdrawal collaborator returned no ticket".to_string())
        })
    }
}
