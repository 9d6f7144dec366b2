use crate::contact::application::ports::incoming::use_cases::GetContactsUseCase;
use crate::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectUseCase, GetProjectBySlugUseCase, GetProjectTagsUseCase, GetProjectsUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    get_contacts: Arc<dyn GetContactsUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project: ProjectUseCases {
                get_list: Arc::new(DefaultStubGetProjectsUseCase),
                get_featured: Arc::new(StubGetFeaturedProjectUseCase::empty()),
                get_by_slug: Arc::new(StubGetProjectBySlugUseCase::default()),
                get_tags: Arc::new(StubGetProjectTagsUseCase::default()),
            },
            get_contacts: Arc::new(StubGetContactsUseCase::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_featured_project(
        mut self,
        uc: impl GetFeaturedProjectUseCase + 'static,
    ) -> Self {
        self.project.get_featured = Arc::new(uc);
        self
    }

    pub fn with_get_project_by_slug(mut self, uc: impl GetProjectBySlugUseCase + 'static) -> Self {
        self.project.get_by_slug = Arc::new(uc);
        self
    }

    pub fn with_get_project_tags(mut self, uc: impl GetProjectTagsUseCase + 'static) -> Self {
        self.project.get_tags = Arc::new(uc);
        self
    }

    pub fn with_get_contacts(mut self, uc: impl GetContactsUseCase + 'static) -> Self {
        self.get_contacts = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            get_contacts_use_case: self.get_contacts,
        })
    }
}
