use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectBySlugError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct ProjectSlugPath {
    /// Case-sensitive project slug
    pub slug: String,
}

#[utoipa::path(
    get,
    path = "/api/projects/{slug}",
    tag = "projects",
    params(ProjectSlugPath),
    responses(
        (status = 200, description = "Project with this slug", body = inline(SuccessResponse<Project>)),
        (
            status = 404,
            description = "No project has this slug",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PROJECT_NOT_FOUND",
                    "message": "Project not found"
                }
            })
        ),
    )
)]
#[get("/api/projects/{slug}")]
pub async fn get_project_by_slug_handler(
    path: web::Path<ProjectSlugPath>,
    data: web::Data<AppState>,
) -> impl Responder {
    let path = path.into_inner();

    match data.project.get_by_slug.execute(&path.slug).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetProjectBySlugError::NotFound) => {
            debug!(slug = %path.slug, "Project slug not found");
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
    }
}
