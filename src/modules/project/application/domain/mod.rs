pub mod catalog;
pub mod entities;

pub use catalog::{CatalogError, ProjectCatalog, ProjectListFilter};
pub use entities::{Project, ProjectId, ProjectLink, Technology, Testimonial, TimelineEntry};
