mod get_featured_project;
mod get_project_by_slug;
mod get_project_tags;
mod get_projects;

// `__path_*` items are generated by `#[utoipa::path]` and needed by `ApiDoc`.
pub use get_featured_project::{__path_get_featured_project_handler, get_featured_project_handler};
pub use get_project_by_slug::{__path_get_project_by_slug_handler, get_project_by_slug_handler};
pub use get_project_tags::{__path_get_project_tags_handler, get_project_tags_handler};
pub use get_projects::{__path_get_projects_handler, get_projects_handler};
