use thiserror::Error;

/// Transport or provider failure on an outbound read. Recovered locally:
/// callers keep their previously rendered page and surface the message.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider reported failure: {0}")]
    Provider(String),
}
