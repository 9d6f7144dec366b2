use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::ProjectListFilter;
use crate::modules::project::application::ports::outgoing::ProjectCardView;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetProjectsQuery {
    /// Exact tag label, e.g. `Vue.js`
    pub tag: Option<String>,
    /// Case-insensitive text matched against title and description
    pub search: Option<String>,
}

impl From<GetProjectsQuery> for ProjectListFilter {
    fn from(q: GetProjectsQuery) -> Self {
        ProjectListFilter {
            tag: q.tag.filter(|t| !t.is_empty()),
            search: q.search,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(GetProjectsQuery),
    responses(
        (status = 200, description = "Projects in catalog order", body = inline(SuccessResponse<Vec<ProjectCardView>>)),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter: ProjectListFilter = query.into_inner().into();
    debug!(tag = ?filter.tag, search = ?filter.search, "Listing projects");

    let cards = data.project.get_list.execute(filter).await;
    ApiResponse::success(cards)
}
