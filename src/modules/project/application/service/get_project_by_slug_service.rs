use async_trait::async_trait;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectBySlugError, GetProjectBySlugUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;

pub struct GetProjectBySlugService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectBySlugService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectBySlugUseCase for GetProjectBySlugService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<Project, GetProjectBySlugError> {
        self.query
            .get_by_slug(slug)
            .await
            .ok_or(GetProjectBySlugError::NotFound)
    }
}
