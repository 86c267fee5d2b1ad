use async_trait::async_trait;
use thiserror::Error;

use crate::models::PricePoint;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("ticker not found: {0}")]
    NotFound(String),

    #[error("rate limited")]
    RateLimited,
}

/// Source of daily OHLCV history, either a persisted price table or a
/// third-party market-data API.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Up to `days` most recent daily bars. Order is not guaranteed.
    async fn fetch_daily_history(
        &self,
        ticker: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, ProviderError>;

    /// Live quote, if the provider has one. The default falls back to the
    /// last close of the history.
    async fn fetch_quote(&self, _ticker: &str) -> Result<Option<f64>, ProviderError> {
        Ok(None)
    }
}
