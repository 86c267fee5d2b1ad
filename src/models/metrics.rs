use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lookback window used when charting a ticker's history
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChartPeriod {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
}

impl ChartPeriod {
    pub fn days_back(&self) -> i64 {
        match self {
            ChartPeriod::OneMonth => 30,
            ChartPeriod::SixMonths => 180,
            ChartPeriod::OneYear => 365,
        }
    }
}

impl std::fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartPeriod::OneMonth => write!(f, "1M"),
            ChartPeriod::SixMonths => write!(f, "6M"),
            ChartPeriod::OneYear => write!(f, "1Y"),
        }
    }
}

impl FromStr for ChartPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1M" => Ok(ChartPeriod::OneMonth),
            "6M" => Ok(ChartPeriod::SixMonths),
            "1Y" => Ok(ChartPeriod::OneYear),
            other => Err(format!("Invalid period: {}. Must be '1M', '6M', or '1Y'", other)),
        }
    }
}

/// Summary price movement over a charted period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodMetrics {
    /// Last close minus first close
    pub dollar_change: f64,
    /// `None` when the first close is zero
    pub percent_change: Option<f64>,
    /// Mean intraday move (close - open)
    pub avg_daily_change: f64,
}
