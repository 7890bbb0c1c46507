use actix_web::{get, web, HttpResponse, Responder};

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::adapter::incoming::web::routes::portfolio_error_response;
use crate::modules::portfolio::domain::entities::Project;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "portfolio",
    responses(
        (status = 200, description = "Projects in display order", body = [Project]),
        (status = 404, description = "Portfolio failed to load", body = ErrorResponse),
        (status = 503, description = "Portfolio is still loading", body = ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_portfolio.execute().await {
        Ok(portfolio) => HttpResponse::Ok().json(&portfolio.projects),
        Err(err) => portfolio_error_response(&err),
    }
}
