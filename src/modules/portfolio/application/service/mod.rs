mod get_portfolio_service;
mod get_single_project_service;

pub use get_portfolio_service::GetPortfolioService;
pub use get_single_project_service::GetSingleProjectService;
