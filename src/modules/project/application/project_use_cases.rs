use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectUseCase, GetProjectBySlugUseCase, GetProjectTagsUseCase, GetProjectsUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_featured: Arc<dyn GetFeaturedProjectUseCase + Send + Sync>,
    pub get_by_slug: Arc<dyn GetProjectBySlugUseCase + Send + Sync>,
    pub get_tags: Arc<dyn GetProjectTagsUseCase + Send + Sync>,
}
