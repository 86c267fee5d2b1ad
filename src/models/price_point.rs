use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// One trading day of OHLCV data for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Point where only the close is known (open/high/low collapse onto it).
    pub fn from_close(date: NaiveDate, close: f64) -> Self {
        Self::new(date, close, close, close, close, 0.0)
    }
}

/// Extract the closing prices of an ascending series.
pub fn closes(history: &[PricePoint]) -> Vec<f64> {
    history.iter().map(|p| p.close).collect()
}
