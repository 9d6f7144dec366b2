use async_trait::async_trait;

#[async_trait]
pub trait GetProjectTagsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<String>;
}
