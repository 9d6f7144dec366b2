use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::project::application::domain::{Project, ProjectCatalog, ProjectListFilter};
use crate::modules::project::application::ports::outgoing::{ProjectCardView, ProjectQuery};

/// Serves project reads from the catalog loaded at startup.
#[derive(Debug, Clone)]
pub struct InMemoryProjectQuery {
    catalog: Arc<ProjectCatalog>,
}

impl InMemoryProjectQuery {
    pub fn new(catalog: Arc<ProjectCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ProjectQuery for InMemoryProjectQuery {
    async fn list(&self, filter: ProjectListFilter) -> Vec<ProjectCardView> {
        self.catalog
            .filter(&filter)
            .map(ProjectCardView::from)
            .collect()
    }

    async fn get_featured(&self) -> Option<Project> {
        self.catalog.featured().cloned()
    }

    async fn get_by_slug(&self, slug: &str) -> Option<Project> {
        self.catalog.by_slug(slug).cloned()
    }

    async fn list_tags(&self) -> Vec<String> {
        self.catalog.tags()
    }

    async fn count(&self) -> usize {
        self.catalog.len()
    }
}
