use crate::models::{ScoreBreakdown, Signal, SubScore, VolatilityRating};

/// Reason reported when no scoring condition fired
pub const NO_SIGNAL_REASON: &str = "Insufficient data for signals";

/// Weight of each scoring component (maximum magnitude of its sub-score)
pub const MA_WEIGHT: i32 = 3;
pub const RSI_WEIGHT: i32 = 2;
pub const MOMENTUM_WEIGHT: i32 = 2;
pub const PRICE_WEIGHT: i32 = 1;
pub const VOLATILITY_WEIGHT: i32 = 1;
pub const NEWS_WEIGHT: i32 = 2;

/// Largest possible |totalScore|
pub const MAX_TOTAL_SCORE: i32 =
    MA_WEIGHT + RSI_WEIGHT + MOMENTUM_WEIGHT + PRICE_WEIGHT + VOLATILITY_WEIGHT + NEWS_WEIGHT;

const RSI_OVERSOLD: f64 = 30.0;
const RSI_OVERBOUGHT: f64 = 70.0;
const NEWS_POSITIVE: f64 = 1.0;
const NEWS_NEGATIVE: f64 = -1.0;

/// Everything the composite scorer looks at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalInputs {
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub rsi14: Option<f64>,
    pub momentum: Option<f64>,
    pub current_price: Option<f64>,
    pub volatility: VolatilityRating,
    /// Mean sentiment of the supplied news, `None` when there was no news
    pub avg_news_sentiment: Option<f64>,
}

/// Scorer output: the classification plus the breakdown that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalOutcome {
    pub signal: Signal,
    pub strength: u8,
    pub reason: String,
    pub breakdown: ScoreBreakdown,
}

/// MA crossover (weight 3): SMA20 above SMA50 is bullish.
pub fn score_ma_crossover(sma20: Option<f64>, sma50: Option<f64>) -> SubScore {
    match (sma20, sma50) {
        (Some(short), Some(long)) if short > long => {
            SubScore::new(MA_WEIGHT, "Bullish MA crossover")
        }
        (Some(short), Some(long)) if short < long => {
            SubScore::new(-MA_WEIGHT, "Bearish MA crossover")
        }
        (Some(_), Some(_)) => SubScore::neutral("No MA crossover (SMA20 equals SMA50)"),
        _ => SubScore::neutral(ScoreBreakdown::INSUFFICIENT_DATA),
    }
}

/// RSI (weight 2): oversold is bullish, overbought bearish.
pub fn score_rsi(rsi14: Option<f64>) -> SubScore {
    match rsi14 {
        Some(rsi) if rsi < RSI_OVERSOLD => SubScore::new(RSI_WEIGHT, "RSI Oversold (<30)"),
        Some(rsi) if rsi > RSI_OVERBOUGHT => SubScore::new(-RSI_WEIGHT, "RSI Overbought (>70)"),
        Some(_) => SubScore::neutral("RSI Neutral (30-70)"),
        None => SubScore::neutral(ScoreBreakdown::INSUFFICIENT_DATA),
    }
}

/// Momentum (weight 2): the sign is the signal.
pub fn score_momentum(momentum: Option<f64>) -> SubScore {
    match momentum {
        Some(m) if m > 0.0 => SubScore::new(MOMENTUM_WEIGHT, "Positive momentum"),
        Some(m) if m < 0.0 => SubScore::new(-MOMENTUM_WEIGHT, "Negative momentum"),
        Some(_) => SubScore::neutral("Flat momentum"),
        None => SubScore::neutral(ScoreBreakdown::INSUFFICIENT_DATA),
    }
}

/// Price vs SMA50 (weight 1).
pub fn score_price_vs_ma(current_price: Option<f64>, sma50: Option<f64>) -> SubScore {
    match (current_price, sma50) {
        (Some(price), Some(ma)) if price > ma => {
            SubScore::new(PRICE_WEIGHT, "Price above 50-day MA")
        }
        (Some(price), Some(ma)) if price < ma => {
            SubScore::new(-PRICE_WEIGHT, "Price below 50-day MA")
        }
        (Some(_), Some(_)) => SubScore::neutral("Price at 50-day MA"),
        _ => SubScore::neutral(ScoreBreakdown::INSUFFICIENT_DATA),
    }
}

/// Volatility (weight 1): calm markets are favoured.
pub fn score_volatility(rating: VolatilityRating) -> SubScore {
    match rating {
        VolatilityRating::Low => SubScore::new(VOLATILITY_WEIGHT, "Low volatility"),
        VolatilityRating::High => SubScore::new(-VOLATILITY_WEIGHT, "High volatility"),
        VolatilityRating::Medium => SubScore::neutral("Medium volatility"),
        VolatilityRating::NotAvailable => SubScore::neutral(ScoreBreakdown::INSUFFICIENT_DATA),
    }
}

/// News sentiment (weight 2), on the mean headline score.
pub fn score_news(avg_sentiment: Option<f64>) -> SubScore {
    match avg_sentiment {
        Some(s) if s > NEWS_POSITIVE => SubScore::new(NEWS_WEIGHT, "Positive news sentiment"),
        Some(s) if s < NEWS_NEGATIVE => SubScore::new(-NEWS_WEIGHT, "Negative news sentiment"),
        Some(_) => SubScore::neutral("Neutral news sentiment"),
        None => SubScore::neutral("No news available"),
    }
}

/// Map a total score to signal strength, 10 points per unit capped at 100.
pub fn signal_strength(total: i32) -> u8 {
    (total.unsigned_abs() * 10).min(100) as u8
}

/// Semicolon-joined reasons of the components that fired, in evaluation order.
pub fn summarize_reasons(breakdown: &ScoreBreakdown) -> String {
    let fired: Vec<&str> = breakdown
        .components()
        .iter()
        .filter(|c| c.fired())
        .map(|c| c.reason.as_str())
        .collect();

    if fired.is_empty() {
        NO_SIGNAL_REASON.to_string()
    } else {
        fired.join("; ")
    }
}

/// Weighted composite scorer.
///
/// Total function: every combination of missing inputs has a defined,
/// neutral contribution.
pub fn generate_signal(inputs: &SignalInputs) -> SignalOutcome {
    let breakdown = ScoreBreakdown {
        ma: score_ma_crossover(inputs.sma20, inputs.sma50),
        rsi: score_rsi(inputs.rsi14),
        momentum: score_momentum(inputs.momentum),
        price: score_price_vs_ma(inputs.current_price, inputs.sma50),
        volatility: score_volatility(inputs.volatility),
        news: score_news(inputs.avg_news_sentiment),
    };

    let total = breakdown.total_score();

    SignalOutcome {
        signal: Signal::from_total_score(total),
        strength: signal_strength(total),
        reason: summarize_reasons(&breakdown),
        breakdown,
    }
}
