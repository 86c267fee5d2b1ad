use async_trait::async_trait;

use crate::external::price_provider::ProviderError;
use crate::models::NewsItem;

/// Sentiment-scored headline feed for a ticker
#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn fetch_news(&self, ticker: &str) -> Result<Vec<NewsItem>, ProviderError>;
}

/// Provider for deployments without a news feed
pub struct NoNews;

#[async_trait]
impl NewsProvider for NoNews {
    async fn fetch_news(&self, _ticker: &str) -> Result<Vec<NewsItem>, ProviderError> {
        Ok(Vec::new())
    }
}
