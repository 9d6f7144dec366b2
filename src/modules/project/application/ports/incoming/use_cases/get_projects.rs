use async_trait::async_trait;

use crate::modules::project::application::{
    domain::ProjectListFilter, ports::outgoing::ProjectCardView,
};

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self, filter: ProjectListFilter) -> Vec<ProjectCardView>;
}
