use actix_web::{get, web, HttpResponse, Responder};
use tracing::warn;

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::modules::portfolio::domain::entities::PortfolioData;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Maps a non-ready load state onto the error envelope. Shared by every
/// read endpoint that depends on the portfolio.
pub fn portfolio_error_response(err: &GetPortfolioError) -> HttpResponse {
    match err {
        GetPortfolioError::Loading => ApiResponse::service_unavailable(
            "PORTFOLIO_LOADING",
            "Portfolio data is still loading",
        ),
        GetPortfolioError::Unavailable(message) => {
            warn!("Portfolio requested while unavailable: {}", message);
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Complete portfolio document", body = PortfolioData),
        (status = 404, description = "Portfolio failed to load", body = ErrorResponse),
        (status = 503, description = "Portfolio is still loading", body = ErrorResponse)
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_portfolio.execute().await {
        Ok(portfolio) => HttpResponse::Ok().json(portfolio.as_ref()),
        Err(err) => portfolio_error_response(&err),
    }
}
