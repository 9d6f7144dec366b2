use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::contact::application::domain::{ContactDirectory, ContactLink};
use crate::modules::contact::application::ports::outgoing::ContactQuery;

#[derive(Debug, Clone)]
pub struct InMemoryContactQuery {
    directory: Arc<ContactDirectory>,
}

impl InMemoryContactQuery {
    pub fn new(directory: Arc<ContactDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl ContactQuery for InMemoryContactQuery {
    async fn list(&self) -> Vec<ContactLink> {
        self.directory.links().to_vec()
    }
}
