// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::project::application::domain::{
    Project, ProjectId, ProjectLink, ProjectListFilter,
};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Summary used by project listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCardView {
    pub id: ProjectId,
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub links: Vec<ProjectLink>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl From<&Project> for ProjectCardView {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id,
            slug: p.slug.clone(),
            title: p.title.clone(),
            description: p.description.clone(),
            image: p.image.clone(),
            tags: p.tags.clone(),
            links: p.links.clone(),
            featured: p.featured,
            date: p.date.clone(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only; absence is `None`, never an error)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Listing in catalog order, narrowed by `filter`.
    async fn list(&self, filter: ProjectListFilter) -> Vec<ProjectCardView>;

    /// Featured project, or the first one; `None` on an empty catalog.
    async fn get_featured(&self) -> Option<Project>;

    /// Exact slug match.
    async fn get_by_slug(&self, slug: &str) -> Option<Project>;

    async fn list_tags(&self) -> Vec<String>;

    async fn count(&self) -> usize;
}
