use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactLink;

#[async_trait]
pub trait ContactQuery: Send + Sync {
    /// All contact methods in declaration order.
    async fn list(&self) -> Vec<ContactLink>;
}
