use std::{future::Future, time::Duration};

use reqwest::{Client, StatusCode};
use thiserror::Error;

pub const DEFAULT_BASE_API: &str = "http://download.finance.yahoo.com/d/quotes.csv";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("quote request timed out")]
    Timeout,

    #[error("quote request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("quote service answered {0}")]
    Status(StatusCode),

    #[error("malformed quote response: expected {expected} values, got {actual}")]
    Malformed { expected: usize, actual: usize },

    #[error("unreadable quote response: {0}")]
    Unreadable(#[from] csv::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = e.status() {
            FetchError::Status(status)
        } else {
            FetchError::Transport(e)
        }
    }
}

/// Anything that can answer "these fields for this symbol" with one CSV line.
pub trait QuoteSource {
    fn fetch_line(
        &self,
        symbol: &str,
        codes: &[String],
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

#[derive(Clone)]
pub struct QuoteClient {
    client: Client,
    base_api: String,
}

impl QuoteClient {
    pub fn new(base_api: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base_api })
    }
}

impl QuoteSource for QuoteClient {
    async fn fetch_line(&self, symbol: &str, codes: &[String]) -> Result<String, FetchError> {
        let fields = codes.concat();

        let body = self
            .client
            .get(&self.base_api)
            .query(&[("s", symbol), ("f", fields.as_str())])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body)
    }
}
