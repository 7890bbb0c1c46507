use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, GetSingleProjectUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    get_single_project: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_portfolio: Arc::new(StubGetPortfolioUseCase::ready()),
            get_single_project: Arc::new(StubGetSingleProjectUseCase::not_found()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_portfolio(
        mut self,
        uc: impl GetPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_portfolio = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_single_project = Arc::new(uc);
        self
    }

    pub fn with_portfolio_use_cases(mut self, use_cases: PortfolioUseCases) -> Self {
        self.get_portfolio = use_cases.get_portfolio;
        self.get_single_project = use_cases.get_single_project;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: PortfolioUseCases {
                get_portfolio: self.get_portfolio,
                get_single_project: self.get_single_project,
            },
        })
    }
}
