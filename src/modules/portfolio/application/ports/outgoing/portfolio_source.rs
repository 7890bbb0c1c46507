// src/modules/portfolio/application/ports/outgoing/portfolio_source.rs

use async_trait::async_trait;

use crate::modules::portfolio::domain::entities::{PortfolioData, PortfolioValidationError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataLoadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Malformed portfolio payload: {0}")]
    Decode(String),

    #[error("Invalid portfolio data: {0}")]
    Invalid(#[from] PortfolioValidationError),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Where a `PortfolioData` comes from. One call is one fetch attempt.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    async fn fetch(&self) -> Result<PortfolioData, DataLoadError>;

    /// Short label for logs (e.g. "embedded" or the endpoint URL).
    fn describe(&self) -> String;
}

/// Decodes and validates a JSON body. Shared by every source so the static
/// and remote variants accept exactly the same schema.
pub fn decode_portfolio(body: &[u8]) -> Result<PortfolioData, DataLoadError> {
    let data: PortfolioData =
        serde_json::from_slice(body).map_err(|e| DataLoadError::Decode(e.to_string()))?;
    data.validate()?;
    Ok(data)
}
