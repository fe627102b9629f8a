use anyhow::{Context, Result};

/// Process configuration, read once at startup. Every provider the core
/// talks to gets its own base URL so environments can point at sandboxes
/// independently.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub fulfillment_base_url: String,
    pub payment_base_url: String,
    pub withdrawal_base_url: String,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port = std::env::var("PORT")
            .context("Missing env: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let fulfillment_base_url =
            std::env::var("FULFILLMENT_BASE_URL").context("Missing env: FULFILLMENT_BASE_URL")?;
        let payment_base_url =
            std::env::var("PAYMENT_BASE_URL").context("Missing env: PAYMENT_BASE_URL")?;
        let withdrawal_base_url =
            std::env::var("WITHDRAWAL_BASE_URL").context("Missing env: WITHDRAWAL_BASE_URL")?;

        let http_timeout_secs = match std::env::var("HTTP_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .context("HTTP_TIMEOUT_SECS must be a valid u64 integer")?,
            Err(_) => 30,
        };

        Ok(Self {
            port,
            fulfillment_base_url,
            payment_base_url,
            withdrawal_base_url,
            http_timeout_secs,
        })
    }
}
