use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Composite trading recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// Total score at or above which the composite signal is BUY
    pub const BUY_THRESHOLD: i32 = 4;
    /// Total score at or below which the composite signal is SELL
    pub const SELL_THRESHOLD: i32 = -4;

    pub fn from_total_score(total: i32) -> Self {
        if total >= Self::BUY_THRESHOLD {
            Signal::Buy
        } else if total <= Self::SELL_THRESHOLD {
            Signal::Sell
        } else {
            Signal::Hold
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Buy => write!(f, "BUY"),
            Signal::Sell => write!(f, "SELL"),
            Signal::Hold => write!(f, "HOLD"),
        }
    }
}

/// Qualitative bucket for annualized volatility
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VolatilityRating {
    /// Annualized volatility below 20%
    Low,
    /// 20% <= volatility < 50%
    Medium,
    /// Volatility of 50% or more
    High,
    /// Not enough price history to measure
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl VolatilityRating {
    pub fn from_volatility(volatility: Option<f64>) -> Self {
        match volatility {
            None => VolatilityRating::NotAvailable,
            Some(v) if v.is_nan() => VolatilityRating::NotAvailable,
            Some(v) if v < 20.0 => VolatilityRating::Low,
            Some(v) if v < 50.0 => VolatilityRating::Medium,
            Some(_) => VolatilityRating::High,
        }
    }
}

impl std::fmt::Display for VolatilityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VolatilityRating::Low => write!(f, "Low"),
            VolatilityRating::Medium => write!(f, "Medium"),
            VolatilityRating::High => write!(f, "High"),
            VolatilityRating::NotAvailable => write!(f, "N/A"),
        }
    }
}

/// One weighted component of the composite score and why it scored that way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubScore {
    pub score: i32,
    pub reason: String,
}

impl SubScore {
    pub fn new(score: i32, reason: impl Into<String>) -> Self {
        Self {
            score,
            reason: reason.into(),
        }
    }

    pub fn neutral(reason: impl Into<String>) -> Self {
        Self::new(0, reason)
    }

    /// A non-neutral condition contributes its reason to the signal summary
    pub fn fired(&self) -> bool {
        self.score != 0
    }
}

/// Per-indicator contributions to the composite signal.
///
/// The total is always derived from the six components, so it cannot drift
/// from their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub ma: SubScore,
    pub rsi: SubScore,
    pub momentum: SubScore,
    pub price: SubScore,
    pub volatility: SubScore,
    pub news: SubScore,
}

impl ScoreBreakdown {
    pub const INSUFFICIENT_DATA: &'static str = "Insufficient data";

    pub fn insufficient_data() -> Self {
        Self {
            ma: SubScore::neutral(Self::INSUFFICIENT_DATA),
            rsi: SubScore::neutral(Self::INSUFFICIENT_DATA),
            momentum: SubScore::neutral(Self::INSUFFICIENT_DATA),
            price: SubScore::neutral(Self::INSUFFICIENT_DATA),
            volatility: SubScore::neutral(Self::INSUFFICIENT_DATA),
            news: SubScore::neutral(Self::INSUFFICIENT_DATA),
        }
    }

    /// Components in evaluation order: MA, RSI, momentum, price, volatility, news
    pub fn components(&self) -> [&SubScore; 6] {
        [
            &self.ma,
            &self.rsi,
            &self.momentum,
            &self.price,
            &self.volatility,
            &self.news,
        ]
    }

    pub fn total_score(&self) -> i32 {
        self.components().iter().map(|c| c.score).sum()
    }
}

impl Serialize for ScoreBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScoreBreakdown", 13)?;
        state.serialize_field("maScore", &self.ma.score)?;
        state.serialize_field("maReason", &self.ma.reason)?;
        state.serialize_field("rsiScore", &self.rsi.score)?;
        state.serialize_field("rsiReason", &self.rsi.reason)?;
        state.serialize_field("momentumScore", &self.momentum.score)?;
        state.serialize_field("momentumReason", &self.momentum.reason)?;
        state.serialize_field("priceScore", &self.price.score)?;
        state.serialize_field("priceReason", &self.price.reason)?;
        state.serialize_field("volatilityScore", &self.volatility.score)?;
        state.serialize_field("volatilityReason", &self.volatility.reason)?;
        state.serialize_field("newsScore", &self.news.score)?;
        state.serialize_field("newsReason", &self.news.reason)?;
        state.serialize_field("totalScore", &self.total_score())?;
        state.end()
    }
}

/// Everything the engine derives for one ticker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalIndicators {
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub rsi14: Option<f64>,
    pub momentum: Option<f64>,
    pub volatility: VolatilityRating,
    /// Annualized volatility in percent
    pub annualized_volatility: Option<f64>,
    pub signal: Signal,
    /// 0..=100
    pub signal_strength: u8,
    pub signal_reason: String,
    pub score_breakdown: ScoreBreakdown,
}

impl TechnicalIndicators {
    pub const NO_HISTORY_REASON: &'static str = "Insufficient historical data";

    /// Result for a ticker with no price history at all
    pub fn no_history() -> Self {
        Self {
            sma20: None,
            sma50: None,
            rsi14: None,
            momentum: None,
            volatility: VolatilityRating::NotAvailable,
            annualized_volatility: None,
            signal: Signal::Hold,
            signal_strength: 0,
            signal_reason: Self::NO_HISTORY_REASON.to_string(),
            score_breakdown: ScoreBreakdown::insufficient_data(),
        }
    }
}

/// Indicator values as of one day, for charting the indicators themselves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub date: NaiveDate,
    pub close: f64,
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub rsi14: Option<f64>,
}
