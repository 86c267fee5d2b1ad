mod metrics;
mod news;
mod price_point;
mod signal;

pub use metrics::{ChartPeriod, PeriodMetrics};
pub use news::{average_sentiment, NewsItem};
pub use price_point::{closes, PricePoint};
pub use signal::{
    IndicatorSnapshot, ScoreBreakdown, Signal, SubScore, TechnicalIndicators, VolatilityRating,
};
