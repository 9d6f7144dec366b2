use async_trait::async_trait;
use tracing::warn;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectError, GetFeaturedProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;

pub struct GetFeaturedProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetFeaturedProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetFeaturedProjectUseCase for GetFeaturedProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Project, GetFeaturedProjectError> {
        match self.query.get_featured().await {
            Some(project) => Ok(project),
            None => {
                warn!("Featured project requested but the catalog is empty");
                Err(GetFeaturedProjectError::EmptyCatalog)
            }
        }
    }
}
