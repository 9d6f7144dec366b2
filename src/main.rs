pub mod api;
pub mod config;
pub mod content;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::contact;
pub use modules::project;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::contact::adapter::outgoing::InMemoryContactQuery;
use crate::contact::application::ports::incoming::use_cases::GetContactsUseCase;
use crate::contact::application::service::GetContactsService;
use crate::content::PortfolioContent;
use crate::health::ContentStats;
use crate::project::adapter::outgoing::InMemoryProjectQuery;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    GetFeaturedProjectService, GetProjectBySlugService, GetProjectTagsService, GetProjectsService,
};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub get_contacts_use_case: Arc<dyn GetContactsUseCase + Send + Sync>,
}

impl AppState {
    /// Wire every use case over the in-memory adapters for `content`.
    pub fn from_content(content: &PortfolioContent) -> Self {
        let project_query = InMemoryProjectQuery::new(Arc::clone(&content.catalog));
        let contact_query = InMemoryContactQuery::new(Arc::clone(&content.contacts));

        Self {
            project: ProjectUseCases {
                get_list: Arc::new(GetProjectsService::new(project_query.clone())),
                get_featured: Arc::new(GetFeaturedProjectService::new(project_query.clone())),
                get_by_slug: Arc::new(GetProjectBySlugService::new(project_query.clone())),
                get_tags: Arc::new(GetProjectTagsService::new(project_query)),
            },
            get_contacts_use_case: Arc::new(GetContactsService::new(contact_query)),
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(environment = %config.environment, "Configuration loaded");

    let content = PortfolioContent::load(config.content_path.as_deref())
        .context("Failed to load portfolio content")?;

    let stats = ContentStats {
        projects: content.catalog.len(),
        contacts: content.contacts.len(),
    };
    if stats.projects == 0 {
        warn!("Project catalog is empty; featured project requests will return 404");
    }

    let state = AppState::from_content(&content);

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(stats))
            .app_data(crate::shared::api::custom_query_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Projects: fixed segments before `{slug}`
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_featured_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_tags_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_by_slug_handler);
    // Contacts
    cfg.service(crate::contact::adapter::incoming::web::routes::get_contacts_handler);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
