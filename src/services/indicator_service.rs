use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use futures::future::join_all;
use tracing::{debug, error, info, warn};

use crate::config::EngineConfig;
use crate::errors::AppError;
use crate::external::{NewsProvider, PriceProvider};
use crate::models::{
    ChartPeriod, IndicatorSnapshot, NewsItem, PeriodMetrics, PricePoint, TechnicalIndicators,
};
use crate::services::cache::Cache;
use crate::services::metrics::{filter_by_period, period_metrics};
use crate::services::snapshots::indicator_snapshots_with;
use crate::services::technical_indicators::calculate_technical_indicators_with;

const MAX_TICKER_LEN: usize = 10;

/// Uppercase and validate a ticker symbol (letters, digits, '.', '-').
pub fn normalize_ticker(ticker: &str) -> Result<String, AppError> {
    let ticker = ticker.trim().to_uppercase();

    if ticker.is_empty() {
        return Err(AppError::Validation("Ticker is required".to_string()));
    }
    if ticker.len() > MAX_TICKER_LEN {
        return Err(AppError::Validation(format!(
            "Ticker {} exceeds {} characters",
            ticker, MAX_TICKER_LEN
        )));
    }
    if !ticker
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(AppError::Validation(format!("Invalid ticker: {}", ticker)));
    }

    Ok(ticker)
}

/// Connects the indicator engine to its collaborators: a price source, a
/// news feed, and a caller-owned cache of computed indicators.
#[derive(Clone)]
pub struct IndicatorService {
    price_provider: Arc<dyn PriceProvider>,
    news_provider: Arc<dyn NewsProvider>,
    cache: Arc<dyn Cache<TechnicalIndicators>>,
    config: EngineConfig,
}

impl IndicatorService {
    pub fn new(
        price_provider: Arc<dyn PriceProvider>,
        news_provider: Arc<dyn NewsProvider>,
        cache: Arc<dyn Cache<TechnicalIndicators>>,
        config: EngineConfig,
    ) -> Self {
        Self {
            price_provider,
            news_provider,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Indicators and composite signal for one ticker, served from cache when fresh.
    pub async fn indicators_for(&self, ticker: &str) -> Result<TechnicalIndicators, AppError> {
        let ticker = normalize_ticker(ticker)?;

        if let Some(cached) = self.cache.get(&ticker) {
            debug!("Indicator cache hit for {}", ticker);
            return Ok(cached);
        }

        let history = self.load_history(&ticker).await?;
        let news = self.load_news(&ticker).await;
        let live_price = self.load_quote(&ticker).await;

        let indicators = calculate_technical_indicators_with(
            &history,
            &news,
            live_price,
            &self.config.indicators,
        );

        if history.is_empty() {
            warn!("No price history for {}; returning neutral indicators", ticker);
        } else {
            self.cache.set(
                &ticker,
                indicators.clone(),
                Some(Duration::seconds(self.config.indicator_cache_ttl_secs)),
            );
        }

        info!(
            ticker = %ticker,
            points = history.len(),
            news = news.len(),
            signal = %indicators.signal,
            total_score = indicators.score_breakdown.total_score(),
            "Computed technical indicators"
        );

        Ok(indicators)
    }

    /// Evaluate several tickers concurrently; each result is independent.
    pub async fn indicators_for_many(
        &self,
        tickers: &[&str],
    ) -> Vec<(String, Result<TechnicalIndicators, AppError>)> {
        let futures = tickers.iter().map(|&ticker| async move {
            (ticker.to_string(), self.indicators_for(ticker).await)
        });
        join_all(futures).await
    }

    /// Indicator trend lines for charting, last `window` days (configured default when `None`).
    pub async fn snapshots_for(
        &self,
        ticker: &str,
        window: Option<usize>,
    ) -> Result<Vec<IndicatorSnapshot>, AppError> {
        let ticker = normalize_ticker(ticker)?;
        let window = window.unwrap_or(self.config.indicators.snapshot_window);
        if window == 0 {
            return Err(AppError::Validation("Snapshot window must be positive".to_string()));
        }

        let history = self.load_history(&ticker).await?;
        Ok(indicator_snapshots_with(&history, window, &self.config.indicators).collect())
    }

    /// Price movement over a chart period ending at `as_of`.
    pub async fn period_metrics_for(
        &self,
        ticker: &str,
        period: ChartPeriod,
        as_of: NaiveDate,
    ) -> Result<Option<PeriodMetrics>, AppError> {
        let ticker = normalize_ticker(ticker)?;
        let history = self.load_history(&ticker).await?;
        let window = filter_by_period(&history, period, as_of);
        Ok(period_metrics(&window))
    }

    /// Drop any cached indicators for `ticker`.
    pub fn invalidate(&self, ticker: &str) -> Result<(), AppError> {
        let ticker = normalize_ticker(ticker)?;
        self.cache.delete(&ticker);
        Ok(())
    }

    async fn load_history(&self, ticker: &str) -> Result<Vec<PricePoint>, AppError> {
        let mut history = self
            .price_provider
            .fetch_daily_history(ticker, self.config.history_days)
            .await
            .map_err(|e| {
                error!("Failed to fetch price history for {}: {}", ticker, e);
                AppError::from(e)
            })?;

        // Providers do not agree on ordering; the engine needs ascending dates
        history.sort_by_key(|p| p.date);
        history.dedup_by_key(|p| p.date);
        Ok(history)
    }

    async fn load_news(&self, ticker: &str) -> Vec<NewsItem> {
        match self.news_provider.fetch_news(ticker).await {
            Ok(news) => news,
            Err(e) => {
                warn!("News unavailable for {}, scoring without sentiment: {}", ticker, e);
                Vec::new()
            }
        }
    }

    async fn load_quote(&self, ticker: &str) -> Option<f64> {
        match self.price_provider.fetch_quote(ticker).await {
            Ok(quote) => quote,
            Err(e) => {
                warn!("Live quote unavailable for {}, using last close: {}", ticker, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::{NoNews, ProviderError};
    use crate::models::Signal;
    use crate::services::cache::TtlCache;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: AtomicUsize,
        closes: Vec<f64>,
    }

    #[async_trait]
    impl PriceProvider for CountingProvider {
        async fn fetch_daily_history(
            &self,
            _ticker: &str,
            _days: u32,
        ) -> Result<Vec<PricePoint>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            // Newest first, as many APIs return it
            Ok(self
                .closes
                .iter()
                .enumerate()
                .rev()
                .map(|(i, &c)| PricePoint::from_close(start + Duration::days(i as i64), c))
                .collect())
        }
    }

    fn service(closes: Vec<f64>) -> (IndicatorService, Arc<CountingProvider>) {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
            closes,
        });
        let cache: Arc<dyn Cache<TechnicalIndicators>> =
            Arc::new(TtlCache::<TechnicalIndicators>::with_ttl_secs(600));
        let svc = IndicatorService::new(
            provider.clone(),
            Arc::new(NoNews),
            cache,
            EngineConfig::default(),
        );
        (svc, provider)
    }

    #[test]
    fn test_normalize_ticker() {
        assert_eq!(normalize_ticker(" brk.b ").unwrap(), "BRK.B");
        assert!(normalize_ticker("").is_err());
        assert!(normalize_ticker("AAPL;DROP").is_err());
        assert!(normalize_ticker("ABCDEFGHIJKL").is_err());
    }

    #[tokio::test]
    async fn test_history_is_sorted_before_scoring() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let (svc, _) = service(closes);

        let indicators = svc.indicators_for("aapl").await.unwrap();
        // Ascending order means a positive 10-day momentum of +10
        assert_eq!(indicators.momentum, Some(10.0));
    }

    #[tokio::test]
    async fn test_second_call_is_cached() {
        let closes: Vec<f64> = (0..60).map(|i| 50.0 + i as f64).collect();
        let (svc, provider) = service(closes);

        let first = svc.indicators_for("MSFT").await.unwrap();
        let second = svc.indicators_for("msft").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

        svc.invalidate("MSFT").unwrap();
        svc.indicators_for("MSFT").await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_history_is_neutral_and_not_cached() {
        let (svc, provider) = service(Vec::new());

        let indicators = svc.indicators_for("NEW").await.unwrap();
        assert_eq!(indicators.signal, Signal::Hold);
        assert_eq!(indicators.signal_reason, "Insufficient historical data");

        svc.indicators_for("NEW").await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_period_metrics_for() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let (svc, _) = service(closes);
        let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(59);

        let metrics = svc
            .period_metrics_for("AAPL", ChartPeriod::OneMonth, as_of)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(metrics.dollar_change, 30.0);
    }
}
