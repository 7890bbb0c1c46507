use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase, GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::portfolio::domain::entities::{PortfolioData, Project};
use crate::tests::support::fixtures::sample_portfolio;

#[derive(Clone)]
pub struct StubGetPortfolioUseCase {
    result: Result<Arc<PortfolioData>, GetPortfolioError>,
}

impl StubGetPortfolioUseCase {
    pub fn ready() -> Self {
        Self::with_data(sample_portfolio())
    }

    pub fn with_data(data: PortfolioData) -> Self {
        Self {
            result: Ok(Arc::new(data)),
        }
    }

    pub fn loading() -> Self {
        Self {
            result: Err(GetPortfolioError::Loading),
        }
    }

    pub fn failed() -> Self {
        Self {
            result: Err(GetPortfolioError::Unavailable(
                "Failed to load portfolio data".to_string(),
            )),
        }
    }
}

#[async_trait]
impl GetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self) -> Result<Arc<PortfolioData>, GetPortfolioError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSingleProjectUseCase {
    result: Result<Project, GetSingleProjectError>,
}

impl StubGetSingleProjectUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleProjectError::NotFound),
        }
    }

    pub fn success(project: Project) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn error(err: GetSingleProjectError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _project_id: u32) -> Result<Project, GetSingleProjectError> {
        self.result.clone()
    }
}
