use async_trait::async_trait;

use crate::modules::contact::application::{
    domain::ContactLink,
    ports::{incoming::use_cases::GetContactsUseCase, outgoing::ContactQuery},
};

#[derive(Debug, Clone)]
pub struct GetContactsService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetContactsService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetContactsUseCase for GetContactsService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    async fn execute(&self) -> Vec<ContactLink> {
        self.query.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::domain::ContactKind;

    // ============================================================
    // Mock Query
    // ============================================================

    #[derive(Clone)]
    struct MockContactQuery {
        links: Vec<ContactLink>,
    }

    #[async_trait]
    impl ContactQuery for MockContactQuery {
        async fn list(&self) -> Vec<ContactLink> {
            self.links.clone()
        }
    }

    fn link(id: &str) -> ContactLink {
        ContactLink {
            id: id.to_string(),
            name: id.to_string(),
            value: Some(format!("{id} value")),
            url: None,
            icon: None,
            kind: ContactKind::Text,
        }
    }

    // ============================================================
    // Tests
    // ============================================================

    #[tokio::test]
    async fn test_get_contacts_returns_query_order() {
        // Arrange
        let service = GetContactsService::new(MockContactQuery {
            links: vec![link("email"), link("location")],
        });

        // Act
        let result = service.execute().await;

        // Assert
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "email");
        assert_eq!(result[1].id, "location");
    }

    #[tokio::test]
    async fn test_get_contacts_empty() {
        let service = GetContactsService::new(MockContactQuery { links: vec![] });
        assert!(service.execute().await.is_empty());
    }
}
