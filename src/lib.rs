//! Technical indicators and composite BUY/SELL/HOLD scoring for stock tickers.
//!
//! The engine (`services::technical_indicators`, `services::signal_service`,
//! `services::volatility`, `services::snapshots`) is pure and synchronous.
//! `services::indicator_service` wires it to price/news providers and an
//! injected cache.

pub mod config;
pub mod errors;
pub mod external;
pub mod logging;
pub mod models;
pub mod services;

pub use config::{EngineConfig, IndicatorParams};
pub use errors::{AppError, IndicatorError};
pub use models::{
    IndicatorSnapshot, NewsItem, PricePoint, ScoreBreakdown, Signal, TechnicalIndicators,
    VolatilityRating,
};
pub use services::cache::{Cache, TtlCache};
pub use services::indicator_service::IndicatorService;
pub use services::snapshots::{indicator_snapshots, indicator_snapshots_with};
pub use services::technical_indicators::{
    calculate_technical_indicators, calculate_technical_indicators_with,
};
