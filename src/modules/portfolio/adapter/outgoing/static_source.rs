use std::borrow::Cow;

use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::{
    decode_portfolio, DataLoadError, PortfolioSource,
};
use crate::modules::portfolio::domain::entities::PortfolioData;

const EMBEDDED_PORTFOLIO: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/portfolio.json"));

/// Serves a JSON document held in memory. Used when no backend is configured.
pub struct StaticPortfolioSource {
    body: Cow<'static, str>,
}

impl StaticPortfolioSource {
    /// The document compiled in from `data/portfolio.json`.
    pub fn embedded() -> Self {
        Self {
            body: Cow::Borrowed(EMBEDDED_PORTFOLIO),
        }
    }

    pub fn from_json(body: impl Into<String>) -> Self {
        Self {
            body: Cow::Owned(body.into()),
        }
    }
}

#[async_trait]
impl PortfolioSource for StaticPortfolioSource {
    async fn fetch(&self) -> Result<PortfolioData, DataLoadError> {
        decode_portfolio(self.body.as_bytes())
    }

    fn describe(&self) -> String {
        match self.body {
            Cow::Borrowed(_) => "embedded".to_string(),
            Cow::Owned(_) => "in-memory".to_string(),
        }
    }
}
