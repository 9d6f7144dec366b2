use async_trait::async_trait;

use crate::contact::application::domain::ContactLink;
use crate::contact::application::ports::incoming::use_cases::GetContactsUseCase;
use crate::project::application::domain::{Project, ProjectListFilter};
use crate::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectError, GetFeaturedProjectUseCase, GetProjectBySlugError,
    GetProjectBySlugUseCase, GetProjectTagsUseCase, GetProjectsUseCase,
};
use crate::project::application::ports::outgoing::ProjectCardView;

// ============================================================
// Projects
// ============================================================

pub struct DefaultStubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for DefaultStubGetProjectsUseCase {
    async fn execute(&self, _filter: ProjectListFilter) -> Vec<ProjectCardView> {
        vec![]
    }
}

#[derive(Clone)]
pub struct StubGetFeaturedProjectUseCase {
    result: Result<Project, GetFeaturedProjectError>,
}

impl StubGetFeaturedProjectUseCase {
    pub fn success(project: Project) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn empty() -> Self {
        Self {
            result: Err(GetFeaturedProjectError::EmptyCatalog),
        }
    }
}

#[async_trait]
impl GetFeaturedProjectUseCase for StubGetFeaturedProjectUseCase {
    async fn execute(&self) -> Result<Project, GetFeaturedProjectError> {
        self.result.clone()
    }
}

/// Answers slug lookups from a fixed list.
#[derive(Clone, Default)]
pub struct StubGetProjectBySlugUseCase {
    projects: Vec<Project>,
}

impl StubGetProjectBySlugUseCase {
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

#[async_trait]
impl GetProjectBySlugUseCase for StubGetProjectBySlugUseCase {
    async fn execute(&self, slug: &str) -> Result<Project, GetProjectBySlugError> {
        self.projects
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or(GetProjectBySlugError::NotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubGetProjectTagsUseCase(pub Vec<String>);

#[async_trait]
impl GetProjectTagsUseCase for StubGetProjectTagsUseCase {
    async fn execute(&self) -> Vec<String> {
        self.0.clone()
    }
}

// ============================================================
// Contacts
// ============================================================

#[derive(Clone, Default)]
pub struct StubGetContactsUseCase(pub Vec<ContactLink>);

#[async_trait]
impl GetContactsUseCase for StubGetContactsUseCase {
    async fn execute(&self) -> Vec<ContactLink> {
        self.0.clone()
    }
}
