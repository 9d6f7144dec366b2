mod get_featured_project;
mod get_project_by_slug;
mod get_project_tags;
mod get_projects;

pub use get_featured_project::{GetFeaturedProjectError, GetFeaturedProjectUseCase};
pub use get_project_by_slug::{GetProjectBySlugError, GetProjectBySlugUseCase};
pub use get_project_tags::GetProjectTagsUseCase;
pub use get_projects::GetProjectsUseCase;
