use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::GetProjectTagsUseCase;
use crate::modules::project::application::ports::outgoing::ProjectQuery;

pub struct GetProjectTagsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectTagsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectTagsUseCase for GetProjectTagsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Vec<String> {
        self.query.list_tags().await
    }
}
