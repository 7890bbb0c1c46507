use actix_web::{get, web, HttpResponse, Responder};

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::adapter::incoming::web::routes::portfolio_error_response;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::modules::portfolio::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = "portfolio",
    params(
        ("project_id" = u32, Path, description = "Project id")
    ),
    responses(
        (status = 200, description = "Project found", body = Project),
        (status = 404, description = "Project or portfolio not found", body = ErrorResponse),
        (status = 503, description = "Portfolio is still loading", body = ErrorResponse)
    )
)]
#[get("/api/projects/{project_id}")]
pub async fn get_single_project_handler(
    path: web::Path<u32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.portfolio.get_single_project.execute(project_id).await {
        Ok(project) => HttpResponse::Ok().json(project),

        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetSingleProjectError::Portfolio(err)) => portfolio_error_response(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_project;
    use crate::tests::support::stubs::StubGetSingleProjectUseCase;

    #[actix_web::test]
    async fn test_get_single_project_success() {
        let app_state = TestAppStateBuilder::default()
            .with_get_single_project(StubGetSingleProjectUseCase::success(sample_project(
                2, "Weathere",
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_single_project_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects/2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], 2);
        assert_eq!(body["name"], "Weathere");
        assert!(body["githubLink"].is_string());
    }

    #[actix_web::test]
    async fn test_get_single_project_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_get_single_project(StubGetSingleProjectUseCase::error(
                GetSingleProjectError::NotFound,
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_single_project_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_get_single_project_while_loading() {
        let app_state = TestAppStateBuilder::default()
            .with_get_single_project(StubGetSingleProjectUseCase::error(
                GetSingleProjectError::Portfolio(GetPortfolioError::Loading),
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_single_project_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_get_single_project_non_numeric_id() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_single_project_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects/not-a-number")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
