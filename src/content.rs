//! Portfolio content document.
//!
//! The document is read once at startup, either from the copy embedded at
//! build time or from a JSON file, and turned into the validated project
//! catalog and contact directory shared by every worker.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::modules::contact::application::domain::{
    ContactDirectory, ContactDirectoryError, ContactLink,
};
use crate::modules::project::application::domain::{CatalogError, Project, ProjectCatalog};

pub const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Content document is not valid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid project catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid contact directory: {0}")]
    Contacts(#[from] ContactDirectoryError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PortfolioDocument {
    #[serde(default)]
    contacts: Vec<ContactLink>,
    #[serde(default)]
    projects: Vec<Project>,
}

#[derive(Debug, Clone)]
pub struct PortfolioContent {
    pub catalog: Arc<ProjectCatalog>,
    pub contacts: Arc<ContactDirectory>,
}

impl PortfolioContent {
    /// Reads `path` when given, the embedded document otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|e| ContentError::Io(path.to_path_buf(), e))?;
                let content = Self::from_json(&raw)?;
                info!(
                    path = %path.display(),
                    projects = content.catalog.len(),
                    contacts = content.contacts.len(),
                    "Loaded portfolio content"
                );
                Ok(content)
            }
            None => {
                let content = Self::from_json(EMBEDDED_CONTENT)?;
                info!(
                    projects = content.catalog.len(),
                    contacts = content.contacts.len(),
                    "Loaded embedded portfolio content"
                );
                Ok(content)
            }
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let document: PortfolioDocument = serde_json::from_str(raw)?;

        Ok(Self {
            catalog: Arc::new(ProjectCatalog::new(document.projects)?),
            contacts: Arc::new(ContactDirectory::new(document.contacts)?),
        })
    }
}
