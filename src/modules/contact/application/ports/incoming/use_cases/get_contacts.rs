use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactLink;

#[async_trait]
pub trait GetContactsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<ContactLink>;
}
