use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::contact::application::domain::{ContactKind, ContactLink};
use crate::modules::project::application::domain::{
    Project, ProjectLink, Technology, Testimonial, TimelineEntry,
};
use crate::modules::project::application::ports::outgoing::ProjectCardView;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Content API",
        version = "1.0.0",
        description = "Read-only access to portfolio projects and contact methods"
    ),
    paths(
        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_featured_project_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_tags_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_by_slug_handler,

        // Contact endpoints
        crate::modules::contact::adapter::incoming::web::routes::get_contacts_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Projects
            Project,
            ProjectCardView,
            ProjectLink,
            Technology,
            Testimonial,
            TimelineEntry,

            // Contacts
            ContactLink,
            ContactKind,
        )
    ),
    tags(
        (name = "projects", description = "Project case studies"),
        (name = "contacts", description = "Contact methods"),
    )
)]
pub struct ApiDoc;
