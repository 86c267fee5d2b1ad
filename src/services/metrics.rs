use chrono::{Duration, NaiveDate};

use crate::models::{ChartPeriod, PeriodMetrics, PricePoint};

/// Points dated on or after `as_of - period.days_back()`.
pub fn filter_by_period(
    history: &[PricePoint],
    period: ChartPeriod,
    as_of: NaiveDate,
) -> Vec<PricePoint> {
    let cutoff = as_of - Duration::days(period.days_back());
    history
        .iter()
        .filter(|p| p.date >= cutoff)
        .cloned()
        .collect()
}

/// Dollar change, percent change and average intraday move of a series.
pub fn period_metrics(history: &[PricePoint]) -> Option<PeriodMetrics> {
    let first = history.first()?;
    let last = history.last()?;

    let dollar_change = last.close - first.close;
    let percent_change = if first.close != 0.0 {
        Some(dollar_change / first.close * 100.0)
    } else {
        None
    };

    let avg_daily_change =
        history.iter().map(|p| p.close - p.open).sum::<f64>() / history.len() as f64;

    Some(PeriodMetrics {
        dollar_change,
        percent_change,
        avg_daily_change,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_period_metrics() {
        let history = vec![
            PricePoint::new(day(3), 99.0, 101.0, 98.0, 100.0, 1_000.0),
            PricePoint::new(day(4), 100.0, 104.0, 99.0, 103.0, 1_200.0),
            PricePoint::new(day(5), 104.0, 111.0, 103.0, 110.0, 1_500.0),
        ];

        let m = period_metrics(&history).unwrap();
        assert_eq!(m.dollar_change, 10.0);
        assert!((m.percent_change.unwrap() - 10.0).abs() < 1e-12);
        assert!((m.avg_daily_change - 10.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_period_metrics_empty_and_zero_start() {
        assert!(period_metrics(&[]).is_none());

        let history = vec![PricePoint::from_close(day(1), 0.0), PricePoint::from_close(day(2), 5.0)];
        let m = period_metrics(&history).unwrap();
        assert_eq!(m.dollar_change, 5.0);
        assert_eq!(m.percent_change, None);
    }

    #[test]
    fn test_filter_by_period() {
        let as_of = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let history: Vec<PricePoint> = (0..400)
            .map(|i| PricePoint::from_close(as_of - Duration::days(399 - i), 100.0))
            .collect();

        assert_eq!(filter_by_period(&history, ChartPeriod::OneMonth, as_of).len(), 31);
        assert_eq!(filter_by_period(&history, ChartPeriod::SixMonths, as_of).len(), 181);
        assert_eq!(filter_by_period(&history, ChartPeriod::OneYear, as_of).len(), 366);
    }

    #[test]
    fn test_parse_period() {
        assert_eq!("1m".parse::<ChartPeriod>(), Ok(ChartPeriod::OneMonth));
        assert_eq!("6M".parse::<ChartPeriod>(), Ok(ChartPeriod::SixMonths));
        assert_eq!("1Y".parse::<ChartPeriod>(), Ok(ChartPeriod::OneYear));
        assert!("5D".parse::<ChartPeriod>().is_err());
    }
}
