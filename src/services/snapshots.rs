use crate::config::IndicatorParams;
use crate::models::{IndicatorSnapshot, PricePoint};
use crate::services::indicators::{rsi, sma};
use crate::services::technical_indicators::{LONG_SMA_PERIOD, SHORT_SMA_PERIOD};

pub const DEFAULT_SNAPSHOT_WINDOW: usize = 30;

/// Lazy per-day indicator snapshots over the tail of a price history.
///
/// Each snapshot only sees prices up to and including its own day. The
/// iterator borrows the history and can be cloned to replay from its
/// current position.
#[derive(Debug, Clone)]
pub struct IndicatorSnapshots<'a> {
    history: &'a [PricePoint],
    closes: Vec<f64>,
    rsi_period: usize,
    next: usize,
}

impl<'a> IndicatorSnapshots<'a> {
    pub fn new(history: &'a [PricePoint], window: usize, rsi_period: usize) -> Self {
        Self {
            history,
            closes: history.iter().map(|p| p.close).collect(),
            rsi_period,
            next: history.len().saturating_sub(window),
        }
    }
}

impl Iterator for IndicatorSnapshots<'_> {
    type Item = IndicatorSnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.history.get(self.next)?;
        let prefix = &self.closes[..=self.next];
        self.next += 1;

        Some(IndicatorSnapshot {
            date: point.date,
            close: point.close,
            sma20: sma(prefix, SHORT_SMA_PERIOD),
            sma50: sma(prefix, LONG_SMA_PERIOD),
            rsi14: rsi(prefix, self.rsi_period),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.history.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IndicatorSnapshots<'_> {}

/// Snapshots for the last `window` days (30 by default) of an ascending history.
pub fn indicator_snapshots(history: &[PricePoint], window: usize) -> IndicatorSnapshots<'_> {
    indicator_snapshots_with(history, window, &IndicatorParams::default())
}

/// Same as [`indicator_snapshots`], with the RSI lookback taken from `params`
/// so the series agrees with the engine's latest reading.
pub fn indicator_snapshots_with<'a>(
    history: &'a [PricePoint],
    window: usize,
    params: &IndicatorParams,
) -> IndicatorSnapshots<'a> {
    IndicatorSnapshots::new(history, window, params.rsi_period)
}
