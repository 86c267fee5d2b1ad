pub mod cache;
pub mod indicator_service;
pub mod indicators;
pub mod metrics;
pub mod signal_service;
pub mod snapshots;
pub mod technical_indicators;
pub mod volatility;
