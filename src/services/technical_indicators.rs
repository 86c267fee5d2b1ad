use crate::config::IndicatorParams;
use crate::models::{average_sentiment, closes, NewsItem, PricePoint, TechnicalIndicators};
use crate::services::indicators::{momentum, rsi, sma};
use crate::services::signal_service::{generate_signal, SignalInputs};
use crate::services::volatility::{annualized_volatility, volatility_rating};

pub const SHORT_SMA_PERIOD: usize = 20;
pub const LONG_SMA_PERIOD: usize = 50;

/// Compute every indicator and the composite signal with default periods.
///
/// `history` must be in ascending date order. The current price is the last close.
pub fn calculate_technical_indicators(
    history: &[PricePoint],
    news: &[NewsItem],
) -> TechnicalIndicators {
    calculate_technical_indicators_with(history, news, None, &IndicatorParams::default())
}

/// Full form: an optional live quote overrides the last close as the
/// current price, and the lookback periods come from `params`.
///
/// A quote that is not finite or not positive is ignored.
pub fn calculate_technical_indicators_with(
    history: &[PricePoint],
    news: &[NewsItem],
    live_price: Option<f64>,
    params: &IndicatorParams,
) -> TechnicalIndicators {
    if history.is_empty() {
        return TechnicalIndicators::no_history();
    }

    let prices = closes(history);
    let current_price = live_price
        .filter(|p| p.is_finite() && *p > 0.0)
        .or_else(|| prices.last().copied());

    let sma20 = sma(&prices, SHORT_SMA_PERIOD);
    let sma50 = sma(&prices, LONG_SMA_PERIOD);
    let rsi14 = rsi(&prices, params.rsi_period);
    let momentum = momentum(&prices, params.momentum_period);
    let annualized = annualized_volatility(&prices);
    let volatility = volatility_rating(annualized);

    let outcome = generate_signal(&SignalInputs {
        sma20,
        sma50,
        rsi14,
        momentum,
        current_price,
        volatility,
        avg_news_sentiment: average_sentiment(news),
    });

    TechnicalIndicators {
        sma20,
        sma50,
        rsi14,
        momentum,
        volatility,
        annualized_volatility: annualized,
        signal: outcome.signal,
        signal_strength: outcome.strength,
        signal_reason: outcome.reason,
        score_breakdown: outcome.breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Signal, VolatilityRating};
    use chrono::{Duration, NaiveDate, Utc};

    fn history_from(closes: &[f64]) -> Vec<PricePoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PricePoint::from_close(start + Duration::days(i as i64), c))
            .collect()
    }

    #[test]
    fn test_empty_history() {
        let result = calculate_technical_indicators(&[], &[]);
        assert_eq!(result.sma20, None);
        assert_eq!(result.sma50, None);
        assert_eq!(result.rsi14, None);
        assert_eq!(result.momentum, None);
        assert_eq!(result.volatility, VolatilityRating::NotAvailable);
        assert_eq!(result.signal, Signal::Hold);
        assert_eq!(result.signal_strength, 0);
        assert_eq!(result.signal_reason, "Insufficient historical data");
        assert_eq!(result.score_breakdown.total_score(), 0);
    }

    #[test]
    fn test_short_history_only_has_momentum() {
        let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let history = history_from(&closes);
        let params = IndicatorParams {
            momentum_period: 9,
            ..IndicatorParams::default()
        };

        let result = calculate_technical_indicators_with(&history, &[], None, &params);
        assert_eq!(result.momentum, Some(9.0));
        assert_eq!(result.sma20, None);
        assert_eq!(result.sma50, None);
        assert_eq!(result.rsi14, None);
        assert_eq!(result.score_breakdown.momentum.score, 2);
    }

    #[test]
    fn test_live_price_overrides_last_close() {
        let closes = vec![100.0; 60];
        let history = history_from(&closes);

        let above = calculate_technical_indicators_with(
            &history,
            &[],
            Some(105.0),
            &IndicatorParams::default(),
        );
        assert_eq!(above.score_breakdown.price.score, 1);

        let flat = calculate_technical_indicators(&history, &[]);
        assert_eq!(flat.score_breakdown.price.score, 0);
    }

    #[test]
    fn test_invalid_live_price_falls_back_to_last_close() {
        let history = history_from(&[100.0; 60]);

        for quote in [-5.0, 0.0, f64::NAN, f64::INFINITY] {
            let result = calculate_technical_indicators_with(
                &history,
                &[],
                Some(quote),
                &IndicatorParams::default(),
            );
            assert_eq!(result.score_breakdown.price.score, 0, "quote {}", quote);
            assert_eq!(result.score_breakdown.price.reason, "Price at 50-day MA");
        }
    }

    #[test]
    fn test_news_feeds_sentiment_score() {
        let history = history_from(&[100.0; 5]);
        let news = vec![NewsItem::new(-4.0, Utc::now()), NewsItem::new(0.0, Utc::now())];

        let result = calculate_technical_indicators(&history, &news);
        assert_eq!(result.score_breakdown.news.score, -2);
        assert!(result.signal_reason.contains("Negative news sentiment"));
    }

    #[test]
    fn test_steady_uptrend_is_buy() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64 * 0.1).collect();
        let result = calculate_technical_indicators(&history_from(&closes), &[]);

        // MA +3, RSI 100 overbought -2, momentum +2, price +1, volatility low +1
        assert_eq!(result.rsi14, Some(100.0));
        assert_eq!(result.volatility, VolatilityRating::Low);
        assert_eq!(result.score_breakdown.total_score(), 5);
        assert_eq!(result.signal, Signal::Buy);
        assert_eq!(result.signal_strength, 50);
    }
}
