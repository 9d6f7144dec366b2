use std::collections::HashSet;

use email_address::EmailAddress;

use super::entities::{ContactKind, ContactLink};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactDirectoryError {
    #[error("Duplicate contact id '{0}'")]
    DuplicateId(String),

    #[error("Contact '{0}' has neither a value nor a url")]
    MissingTarget(String),

    #[error("Contact '{0}' has both a value and a url")]
    AmbiguousTarget(String),

    #[error("Link contact '{0}' has no url")]
    LinkWithoutUrl(String),

    #[error("Email contact '{id}' has an invalid address '{value}'")]
    InvalidEmail { id: String, value: String },
}

/// Ordered, immutable list of contact methods.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    links: Vec<ContactLink>,
}

impl ContactDirectory {
    pub fn new(links: Vec<ContactLink>) -> Result<Self, ContactDirectoryError> {
        let mut ids = HashSet::with_capacity(links.len());

        for link in &links {
            if !ids.insert(link.id.as_str()) {
                return Err(ContactDirectoryError::DuplicateId(link.id.clone()));
            }
            validate(link)?;
        }

        Ok(Self { links })
    }

    pub fn links(&self) -> &[ContactLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

fn validate(link: &ContactLink) -> Result<(), ContactDirectoryError> {
    match (&link.value, &link.url) {
        (None, None) => return Err(ContactDirectoryError::MissingTarget(link.id.clone())),
        (Some(_), Some(_)) => return Err(ContactDirectoryError::AmbiguousTarget(link.id.clone())),
        _ => {}
    }

    match link.kind {
        ContactKind::Link if link.url.is_none() => {
            Err(ContactDirectoryError::LinkWithoutUrl(link.id.clone()))
        }
        ContactKind::Email => match &link.value {
            Some(value) if EmailAddress::is_valid(value) => Ok(()),
            other => Err(ContactDirectoryError::InvalidEmail {
                id: link.id.clone(),
                value: other.clone().unwrap_or_default(),
            }),
        },
        _ => Ok(()),
    }
}
