use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use repository::{Catalog, Repository};
use serde::Deserialize;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub mod healthz;
pub mod not_found;
pub mod prompt;
mod response;
pub mod tag;

pub enum ApiError {
    ClientError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    catalog: Catalog,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub server: Server,
    pub database: DatabasePool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DatabasePool {
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz::get_health,
        prompt::get_prompts,
        prompt::get_prompt,
        prompt::post_view,
        tag::get_tags,
    ),
    components(schemas(
        prompt::request::PostViewRequest,
        prompt::response::Prompt,
        prompt::response::GetPromptsResponse,
        prompt::response::GetPromptResponse,
        prompt::response::PostViewResponse,
        tag::response::Tag,
        tag::response::GetTagsResponse,
    )),
    tags(
        (name = "prompts", description = "Browse the prompt gallery")
    )
)]
struct ApiDoc;

pub async fn serve(
    repository: Repository,
    config: &Config,
) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    let state = Arc::new(ApiState {
        catalog: Catalog::new(repository),
    });

    let origins = config
        .server
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // prompts
    let prompt_router = Router::new()
        .route("/", get(prompt::get_prompts))
        .route("/:id", get(prompt::get_prompt))
        .route("/:id/views", post(prompt::post_view))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // tags
    let tag_router = Router::new()
        .route("/", get(tag::get_tags))
        .fallback(not_found::get_404)
        .with_state(state);

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/healthz", get(healthz::get_health))
        .nest("/prompts", prompt_router)
        .nest("/tags", tag_router)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .fallback(not_found::get_404);

    Ok(router)
}
