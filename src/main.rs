//! Process entry point: config, tracing, wiring, serve.

use std::sync::Arc;

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use advisor_registry::adapters::http::advisor::{advisor_routes, AdvisorHandlers};
use advisor_registry::adapters::random::ThreadRngScorer;
use advisor_registry::adapters::storage::InMemoryAdvisorRepository;
use advisor_registry::application::handlers::advisor::{
    CreateAdvisorHandler, DeleteAdvisorHandler, GetAdvisorByIdHandler, ListAdvisorsHandler,
    UpdateAdvisorHandler,
};
use advisor_registry::application::Dispatcher;
use advisor_registry::config::AppConfig;
use advisor_registry::ports::{AdvisorRepository, HealthScorer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let repository: Arc<dyn AdvisorRepository> = Arc::new(InMemoryAdvisorRepository::new());
    let scorer: Arc<dyn HealthScorer> = Arc::new(ThreadRngScorer);

    let dispatcher = Arc::new(Dispatcher::new(
        Arc::new(CreateAdvisorHandler::new(repository.clone(), scorer)),
        Arc::new(UpdateAdvisorHandler::new(repository.clone())),
        Arc::new(DeleteAdvisorHandler::new(repository.clone())),
        Arc::new(GetAdvisorByIdHandler::new(repository.clone())),
        Arc::new(ListAdvisorsHandler::new(repository)),
    ));

    let app = Router::new()
        .nest("/api/advisors", advisor_routes(AdvisorHandlers::new(dispatcher)))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config)?);

    let addr = config.server.socket_addr()?;
    info!(%addr, "advisor registry listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .map(|origin| origin.parse())
        .collect::<Result<_, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any))
}
