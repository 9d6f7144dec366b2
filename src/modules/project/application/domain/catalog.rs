use std::collections::HashSet;

use super::entities::{Project, ProjectId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Project {id} has a blank slug")]
    BlankSlug { id: ProjectId },

    #[error("Project {id} slug '{slug}' contains whitespace")]
    WhitespaceInSlug { id: ProjectId, slug: String },

    #[error("Duplicate project id {0}")]
    DuplicateId(ProjectId),

    #[error("Duplicate project slug '{0}'")]
    DuplicateSlug(String),

    #[error("More than one featured project: '{first}' and '{second}'")]
    MultipleFeatured { first: String, second: String },
}

/// Optional narrowing applied by [`ProjectCatalog::filter`].
#[derive(Debug, Clone, Default)]
pub struct ProjectListFilter {
    /// Exact, case-sensitive tag label.
    pub tag: Option<String>,
    /// Case-insensitive substring over title and description.
    pub search: Option<String>,
}

/// The fixed, ordered list of projects.
///
/// Built once at startup and never mutated afterwards. Construction checks
/// that ids and slugs are unique and that at most one record is featured.
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(projects.len());
        let mut slugs = HashSet::with_capacity(projects.len());
        let mut featured: Option<&str> = None;

        for project in &projects {
            if project.slug.is_empty() {
                return Err(CatalogError::BlankSlug { id: project.id });
            }
            if project.slug.chars().any(char::is_whitespace) {
                return Err(CatalogError::WhitespaceInSlug {
                    id: project.id,
                    slug: project.slug.clone(),
                });
            }
            if !ids.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
            if !slugs.insert(project.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(project.slug.clone()));
            }
            if project.featured {
                if let Some(first) = featured {
                    return Err(CatalogError::MultipleFeatured {
                        first: first.to_string(),
                        second: project.slug.clone(),
                    });
                }
                featured = Some(project.slug.as_str());
            }
        }

        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// First featured project, falling back to the first project overall.
    /// `None` only when the catalog is empty.
    pub fn featured(&self) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.featured)
            .or_else(|| self.projects.first())
    }

    /// Exact, case-sensitive slug lookup.
    pub fn by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    /// Projects matching every criterion of `filter`, in catalog order.
    pub fn filter<'a>(&'a self, filter: &ProjectListFilter) -> impl Iterator<Item = &'a Project> {
        let tag = filter.tag.clone();
        let needle = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        self.projects.iter().filter(move |p| {
            tag.as_deref().map_or(true, |t| p.has_tag(t))
                && needle.as_deref().map_or(true, |n| p.mentions(n))
        })
    }

    /// Distinct tag labels in first-seen order.
    pub fn tags(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.projects
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .filter(|t| seen.insert(*t))
            .map(str::to_string)
            .collect()
    }
}
