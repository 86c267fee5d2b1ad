use tracing::debug;

use crate::errors::IndicatorError;
use crate::models::VolatilityRating;

/// Trading days used to annualize daily volatility
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Natural-log returns for each consecutive pair of closes.
///
/// Pairs where either close is not strictly positive are skipped.
pub fn log_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .filter(|w| w[0] > 0.0 && w[1] > 0.0)
        .map(|w| (w[1] / w[0]).ln())
        .collect()
}

/// Sample standard deviation (Bessel's correction, divides by n - 1).
pub fn sample_std_dev(values: &[f64]) -> Result<f64, IndicatorError> {
    let n = values.len();
    if n < 2 {
        return Err(IndicatorError::InsufficientData { needed: 2, got: n });
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values
        .iter()
        .map(|&v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / (n - 1) as f64;

    Ok(variance.sqrt())
}

/// Annualized volatility of a close series, as a percentage.
///
/// `None` when the series yields fewer than two valid log returns.
pub fn annualized_volatility(closes: &[f64]) -> Option<f64> {
    let returns = log_returns(closes);

    match sample_std_dev(&returns) {
        Ok(daily) => Some(daily * TRADING_DAYS_PER_YEAR.sqrt() * 100.0),
        Err(e) => {
            debug!("Volatility unavailable: {}", e);
            None
        }
    }
}

pub fn volatility_rating(volatility: Option<f64>) -> VolatilityRating {
    VolatilityRating::from_volatility(volatility)
}
