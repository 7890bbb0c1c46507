use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::portfolio::adapter::incoming::web::routes::{self, ApiRootResponse};
use crate::modules::portfolio::domain::entities::{
    ContactInfo, EducationEntry, PersonalInfo, PortfolioData, Project, TechStack,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read-only access to the portfolio document served by this site"
    ),
    paths(
        routes::api_root::api_root_handler,
        routes::get_portfolio::get_portfolio_handler,
        routes::get_projects::get_projects_handler,
        routes::get_single_project::get_single_project_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            ApiRootResponse,
            PortfolioData,
            PersonalInfo,
            Project,
            EducationEntry,
            TechStack,
            ContactInfo
        )
    ),
    tags(
        (name = "portfolio", description = "Portfolio document and projects"),
    )
)]
pub struct ApiDoc;
