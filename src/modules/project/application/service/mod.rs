mod get_featured_project_service;
mod get_project_by_slug_service;
mod get_project_tags_service;
mod get_projects_service;

pub use get_featured_project_service::GetFeaturedProjectService;
pub use get_project_by_slug_service::GetProjectBySlugService;
pub use get_project_tags_service::GetProjectTagsService;
pub use get_projects_service::GetProjectsService;
