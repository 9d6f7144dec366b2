use async_trait::async_trait;

use crate::modules::project::application::domain::ProjectListFilter;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsUseCase;
use crate::modules::project::application::ports::outgoing::{ProjectCardView, ProjectQuery};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, filter: ProjectListFilter) -> Vec<ProjectCardView> {
        self.query.list(filter).await
    }
}
