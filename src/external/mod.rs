pub mod news_provider;
pub mod price_provider;

pub use news_provider::{NewsProvider, NoNews};
pub use price_provider::{PriceProvider, ProviderError};
