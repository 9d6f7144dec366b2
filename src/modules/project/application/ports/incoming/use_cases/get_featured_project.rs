use async_trait::async_trait;

use crate::modules::project::application::domain::Project;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetFeaturedProjectError {
    #[error("Project catalog is empty")]
    EmptyCatalog,
}

#[async_trait]
pub trait GetFeaturedProjectUseCase: Send + Sync {
    async fn execute(&self) -> Result<Project, GetFeaturedProjectError>;
}
