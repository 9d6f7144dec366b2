use async_trait::async_trait;

use crate::modules::project::application::domain::Project;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetProjectBySlugError {
    #[error("Project not found")]
    NotFound,
}

#[async_trait]
pub trait GetProjectBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Project, GetProjectBySlugError>;
}
