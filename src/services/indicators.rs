/// Round to two decimal places, the precision indicators are reported at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Simple Moving Average (SMA) of the most recent `period` values.
///
/// Returns `None` when fewer than `period` values exist. Never pads.
pub fn sma(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period {
        return None;
    }

    let sum: f64 = prices.iter().rev().take(period).sum();
    Some(sum / period as f64)
}

/// Relative Strength Index (RSI)
///
/// Measures momentum by comparing recent gains to recent losses.
/// RSI values range from 0 to 100:
/// - Below 30: Oversold condition (potential buy signal)
/// - Above 70: Overbought condition (potential sell signal)
///
/// Calculation:
/// 1. Day-over-day changes across the whole series
/// 2. Simple average of the last `period` gains and the last `period` losses
///    (no Wilder smoothing of earlier values)
/// 3. RS = Average Gain / Average Loss
/// 4. RSI = 100 - (100 / (1 + RS)), or exactly 100 when Average Loss is zero
///
/// Needs `period + 1` prices. Rounded to 2 decimals.
pub fn rsi(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period + 1 {
        return None;
    }

    let changes: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let recent = &changes[changes.len() - period..];

    let (gains, losses) = recent
        .iter()
        .fold((0.0_f64, 0.0_f64), |(g, l), &c| (g + c.max(0.0), l + (-c).max(0.0)));

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(round2(100.0 - 100.0 / (1.0 + rs)))
}

/// Price momentum: latest close minus the close `period` days earlier.
///
/// Positive is bullish, negative bearish. Rounded to 2 decimals, `None`
/// with fewer than `period + 1` prices.
pub fn momentum(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period + 1 {
        return None;
    }

    let current = prices[prices.len() - 1];
    let previous = prices[prices.len() - 1 - period];
    Some(round2(current - previous))
}
