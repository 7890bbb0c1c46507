use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::portfolio::application::data_provider::LoadState;
use crate::modules::portfolio::domain::entities::PortfolioData;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Portfolio data is still loading")]
    Loading,

    #[error("{0}")]
    Unavailable(String),
}

/// Snapshot of the current load cycle.
#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<Arc<PortfolioData>, GetPortfolioError>;
}

impl From<Result<Arc<PortfolioData>, GetPortfolioError>> for LoadState {
    fn from(result: Result<Arc<PortfolioData>, GetPortfolioError>) -> Self {
        match result {
            Ok(data) => LoadState::Ready(data),
            Err(GetPortfolioError::Loading) => LoadState::Loading,
            Err(GetPortfolioError::Unavailable(message)) => LoadState::Failed(message),
        }
    }
}
