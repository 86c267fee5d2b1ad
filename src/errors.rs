use thiserror::Error;

use crate::external::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Rate limited by external provider")]
    RateLimited,
    #[error("External error: {0}")]
    External(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Raised inside indicator math when a series is too short for a statistic.
/// Public indicator functions turn it into `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("Insufficient data: need {needed} values, got {got}")]
    InsufficientData { needed: usize, got: usize },
}

impl From<ProviderError> for AppError {
    fn from(value: ProviderError) -> Self {
        match value {
            ProviderError::RateLimited => AppError::RateLimited,
            ProviderError::NotFound(ticker) => {
                AppError::NotFound(format!("No data found for ticker {}", ticker))
            }
            other => AppError::External(other.to_string()),
        }
    }
}
