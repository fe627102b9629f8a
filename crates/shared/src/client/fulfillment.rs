use crate::{
    abstract_trait::order::FulfillmentClientTrait,
    client::create_client,
    domain::requests::order::OrderProviderQuery,
    errors::FetchError,
    model::FulfillmentEnvelope,
};
use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

/// HTTP client for the Shiprocket-backed fulfillment provider.
pub struct ShiprocketClient {
    base_url: String,
    client: Client,
}

impl ShiprocketClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        Self {
            base_url,
            client: create_client(timeout_secs),
        }
    }
}

#[async_trait]
impl FulfillmentClientTrait for ShiprocketClient {
    async fn fetch_orders(
        &self,
        query: &OrderProviderQuery,
    ) -> Result<FulfillmentEnvelope, FetchError> {
        let mut params: Vec<(&str, String)> = vec![
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(status) = query.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(source) = query.source {
            params.push(("source", source.as_str().to_string()));
        }

        info!("📡 GET {}/orders page={}", self.base_url, query.page);

        let response = self
            .client
            .get(format!("{}/orders", self.base_url))
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let envelope = match response.json::<FulfillmentEnvelope>().await {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(FetchError::Provider(format!(
                    "fulfillment provider returned {status}"
                )));
            }
            Err(err) => return Err(FetchError::Transport(err)),
        };

        if !envelope.success {
            return Err(FetchError::Provider(
                envelope
                    .error
                    .unwrap_or_else(|| "fulfillment provider reported failure".to_string()),
            ));
        }

        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> OrderProviderQuery {
        OrderProviderQuery {
            page: 1,
            limit: 10,
            status: None,
            source: None,
        }
    }

    #[tokio::test]
    async fn parses_successful_envelope() {
        let mut server = mockito::Server::new_async().await;

        let body = r#"{
            "success": true,
            "data": [{
                "orderId": "SR-1001",
                "customerName": "Rajesh Kumar",
                "items": [{"name": "Cotton Kurta", "quantity": 2, "total": 1798.0}],
                "total": 1798.0,
                "status": "shipped",
                "paymentStatus": "cod",
                "source": "shiprocket",
                "awbCode": "AWB123",
                "courierName": "Delhivery",
                "orderDate": "2024-01-15T12:30:00Z"
            }],
            "pagination": {"page": 1, "limit": 10, "total": 42},
            "summary": {"shiprocket": 42, "total": 42}
        }"#;

        let _mock = server
            .mock("GET", mockito::Matcher::Regex(r"/orders.*".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = ShiprocketClient::new(server.url(), 5);
        let envelope = client.fetch_orders(&query()).await.unwrap();

        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].order_id, "SR-1001");
        assert_eq!(envelope.data[0].awb_code.as_deref(), Some("AWB123"));
        assert_eq!(envelope.pagination.as_ref().unwrap().total, 42);
    }

    #[tokio::test]
    async fn provider_failure_carries_the_error_message() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", mockito::Matcher::Regex(r"/orders.*".into()))
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": false, "error": "Failed to fetch orders from Shiprocket"}"#)
            .create_async()
            .await;

        let client = ShiprocketClient::new(server.url(), 5);
        let err = client.fetch_orders(&query()).await.unwrap_err();

        match err {
            FetchError::Provider(msg) => {
                assert_eq!(msg, "Failed to fetch orders from Shiprocket")
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_maps_to_provider_status() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", mockito::Matcher::Regex(r"/orders.*".into()))
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let client = ShiprocketClient::new(server.url(), 5);
        let err = client.fetch_orders(&query()).await.unwrap_err();

        assert!(matches!(err, FetchError::Provider(_)));
    }
}
