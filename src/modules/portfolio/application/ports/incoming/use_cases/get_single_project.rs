use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::modules::portfolio::domain::entities::Project;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error(transparent)]
    Portfolio(#[from] GetPortfolioError),
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: u32) -> Result<Project, GetSingleProjectError>;
}
