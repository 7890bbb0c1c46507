use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::portfolio::application::data_provider::{DataProvider, LoadState};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::modules::portfolio::domain::entities::PortfolioData;

pub struct GetPortfolioService {
    provider: Arc<DataProvider>,
}

impl GetPortfolioService {
    pub fn new(provider: Arc<DataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl GetPortfolioUseCase for GetPortfolioService {
    async fn execute(&self) -> Result<Arc<PortfolioData>, GetPortfolioError> {
        match self.provider.current() {
            LoadState::Ready(data) => Ok(data),
            LoadState::Loading => Err(GetPortfolioError::Loading),
            LoadState::Failed(message) => Err(GetPortfolioError::Unavailable(message)),
        }
    }
}
