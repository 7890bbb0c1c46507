use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::portfolio::domain::entities::Project;

pub struct GetSingleProjectService<P>
where
    P: GetPortfolioUseCase,
{
    portfolio: P,
}

impl<P> GetSingleProjectService<P>
where
    P: GetPortfolioUseCase,
{
    pub fn new(portfolio: P) -> Self {
        Self { portfolio }
    }
}

#[async_trait]
impl<P> GetSingleProjectUseCase for GetSingleProjectService<P>
where
    P: GetPortfolioUseCase + Send + Sync,
{
    async fn execute(&self, project_id: u32) -> Result<Project, GetSingleProjectError> {
        let data = self.portfolio.execute().await?;

        data.find_project(project_id)
            .cloned()
            .ok_or(GetSingleProjectError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
    use crate::tests::support::stubs::StubGetPortfolioUseCase;

    #[tokio::test]
    async fn execute_finds_project_by_id() {
        let service = GetSingleProjectService::new(StubGetPortfolioUseCase::ready());

        let project = service.execute(2).await.unwrap();

        assert_eq!(project.id, 2);
        assert_eq!(project.name, "Weathere");
    }

    #[tokio::test]
    async fn execute_unknown_id_is_not_found() {
        let service = GetSingleProjectService::new(StubGetPortfolioUseCase::ready());

        let result = service.execute(999).await;

        assert_eq!(result, Err(GetSingleProjectError::NotFound));
    }

    #[tokio::test]
    async fn execute_propagates_loading() {
        let service = GetSingleProjectService::new(StubGetPortfolioUseCase::loading());

        let result = service.execute(1).await;

        assert_eq!(
            result,
            Err(GetSingleProjectError::Portfolio(GetPortfolioError::Loading))
        );
    }

    #[tokio::test]
    async fn execute_propagates_unavailable() {
        let service = GetSingleProjectService::new(StubGetPortfolioUseCase::failed());

        let result = service.execute(1).await;

        assert!(matches!(
            result,
            Err(GetSingleProjectError::Portfolio(
                GetPortfolioError::Unavailable(_)
            ))
        ));
    }
}
