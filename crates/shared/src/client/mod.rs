mod fulfillment;
mod payment;
mod withdraw;

pub use self::fulfillment::ShiprocketClient;
pub use self::payment::PaymentGatewayClient;
pub use self::withdraw::WithdrawalClient;

use reqwest::Client;
use std::time::Duration;

pub fn create_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_default()
}
