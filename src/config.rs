use std::str::FromStr;

use crate::errors::AppError;

/// Lookback periods used by the indicator engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorParams {
    pub rsi_period: usize,
    pub momentum_period: usize,
    pub snapshot_window: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            momentum_period: 10,
            snapshot_window: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub indicators: IndicatorParams,
    /// Days of daily history requested from the price provider
    pub history_days: u32,
    pub indicator_cache_ttl_secs: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            indicators: IndicatorParams::default(),
            history_days: 365,
            indicator_cache_ttl_secs: 10 * 60,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl EngineConfig {
    /// Load `.env` (if present) and read the engine settings.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let config = Self::from_env();
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            indicators: IndicatorParams {
                rsi_period: env_or("RSI_PERIOD", defaults.indicators.rsi_period),
                momentum_period: env_or("MOMENTUM_PERIOD", defaults.indicators.momentum_period),
                snapshot_window: env_or("SNAPSHOT_WINDOW", defaults.indicators.snapshot_window),
            },
            history_days: env_or("HISTORY_DAYS", defaults.history_days),
            indicator_cache_ttl_secs: env_or(
                "INDICATOR_CACHE_TTL_SECS",
                defaults.indicator_cache_ttl_secs,
            ),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.indicators.rsi_period == 0 {
            return Err(AppError::Config("RSI_PERIOD must be greater than zero".to_string()));
        }
        if self.indicators.momentum_period == 0 {
            return Err(AppError::Config("MOMENTUM_PERIOD must be greater than zero".to_string()));
        }
        if self.indicators.snapshot_window == 0 {
            return Err(AppError::Config("SNAPSHOT_WINDOW must be greater than zero".to_string()));
        }
        if self.history_days == 0 {
            return Err(AppError::Config("HISTORY_DAYS must be greater than zero".to_string()));
        }
        if self.indicator_cache_ttl_secs <= 0 {
            return Err(AppError::Config("INDICATOR_CACHE_TTL_SECS must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.indicators.rsi_period, 14);
        assert_eq!(config.indicators.momentum_period, 10);
        assert_eq!(config.indicators.snapshot_window, 30);
        assert_eq!(config.indicator_cache_ttl_secs, 600);
    }

    #[test]
    fn test_zero_period_rejected() {
        let config = EngineConfig {
            indicators: IndicatorParams {
                rsi_period: 0,
                ..IndicatorParams::default()
            },
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AppError::Config(msg)) if msg.contains("RSI_PERIOD")
        ));
    }

    #[test]
    fn test_non_positive_cache_ttl_rejected() {
        let config = EngineConfig {
            indicator_cache_ttl_secs: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_unparseable_env_value_falls_back() {
        assert_eq!(env_or("STOCK_SIGNALS_TEST_UNSET_VARIABLE", 7usize), 7);
    }
}
