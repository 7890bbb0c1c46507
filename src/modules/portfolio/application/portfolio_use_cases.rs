use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, GetSingleProjectUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub get_single_project: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
}
