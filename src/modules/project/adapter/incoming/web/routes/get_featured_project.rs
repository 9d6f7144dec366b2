use actix_web::{get, web, Responder};
use tracing::warn;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetFeaturedProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "projects",
    responses(
        (status = 200, description = "Featured project, or the first project when none is flagged", body = inline(SuccessResponse<Project>)),
        (
            status = 404,
            description = "The catalog is empty",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PROJECT_NOT_FOUND",
                    "message": "No projects available"
                }
            })
        ),
    )
)]
#[get("/api/projects/featured")]
pub async fn get_featured_project_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_featured.execute().await {
        Ok(project) => ApiResponse::success(project),

        Err(GetFeaturedProjectError::EmptyCatalog) => {
            warn!("No featured project: catalog is empty");
            ApiResponse::not_found("PROJECT_NOT_FOUND", "No projects available")
        }
    }
}
