pub mod api_root;
pub mod get_portfolio;
pub mod get_projects;
pub mod get_single_project;

pub use api_root::{api_root_handler, ApiRootResponse};
pub use get_portfolio::{get_portfolio_handler, portfolio_error_response};
pub use get_projects::get_projects_handler;
pub use get_single_project::get_single_project_handler;
