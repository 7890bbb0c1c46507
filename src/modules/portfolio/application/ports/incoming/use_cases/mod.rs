mod get_portfolio;
mod get_single_project;

pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
