use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A headline scored by the news feed's sentiment analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub sentiment_score: f64,
    pub pub_date: DateTime<Utc>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl NewsItem {
    pub fn new(sentiment_score: f64, pub_date: DateTime<Utc>) -> Self {
        Self {
            sentiment_score,
            pub_date,
            title: None,
            link: None,
            source: None,
        }
    }
}

/// Arithmetic mean of all sentiment scores, `None` when no news was supplied.
pub fn average_sentiment(news: &[NewsItem]) -> Option<f64> {
    if news.is_empty() {
        return None;
    }
    let total: f64 = news.iter().map(|n| n.sentiment_score).sum();
    Some(total / news.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_sentiment_empty_is_none() {
        assert_eq!(average_sentiment(&[]), None);
    }

    #[test]
    fn test_average_sentiment_mean() {
        let now = Utc::now();
        let news = vec![
            NewsItem::new(3.0, now),
            NewsItem::new(-1.0, now),
            NewsItem::new(1.0, now),
        ];
        assert_eq!(average_sentiment(&news), Some(1.0));
    }
}
