use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ShowcaseConfig;
use crate::error::ScenarioError;
use crate::registry::{Principle, ScenarioRegistry, Variant};

pub struct ServerError(anyhow::Error);

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self.0.downcast_ref::<ScenarioError>() {
            Some(ScenarioError::UnknownScenario(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = format!("Showcase Server Error: {}", self.0);
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for ServerError where E: Into<anyhow::Error> {
    fn from(err: E) -> Self { Self(err.into()) }
}

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ScenarioRegistry>,
}

#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub key: String,
    pub principle: Principle,
    pub variant: Variant,
    pub title: String,
    pub path: String,
}

pub fn router(registry: Arc<ScenarioRegistry>) -> Router {
    let state = AppState { registry };

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(|| async { "OK" }))
        .route("/api/scenarios", get(catalog_handler))
        .route("/api/{principle}/{variant}", get(scenario_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: ShowcaseConfig) -> Result<()> {
    let registry = Arc::new(ScenarioRegistry::standard());
    info!("📚 Registered {} SOLID scenarios", registry.len());

    let app = router(registry);

    let addr = config.bind_address();
    info!("🚀 SOLID Showcase listening at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn scenario_handler(
    State(state): State<AppState>,
    Path((principle, variant)): Path<(String, String)>,
) -> Result<String, ServerError> {
    let key = state.registry.resolve(&principle, &variant)?.key();
    let narrative = state.registry.run(key)?;
    Ok(narrative.to_string())
}

async fn catalog_handler(State(state): State<AppState>) -> Json<Vec<CatalogEntry>> {
    let entries = state
        .registry
        .scenarios()
        .map(|scenario| {
            let key = scenario.key();
            CatalogEntry {
                key: key.to_string(),
                principle: key.principle,
                variant: key.variant,
                title: scenario.title(),
                path: format!("/api/{}", key),
            }
        })
        .collect();
    Json(entries)
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>SOLID Principles</title></head>\n<body>\n<h1>SOLID Principles</h1>\n<ul>\n",
    );
    for scenario in state.registry.scenarios() {
        page.push_str(&format!(
            "<li><a href=\"/api/{}\">{}</a></li>\n",
            scenario.key(),
            scenario.title()
        ));
    }
    page.push_str("</ul>\n</body>\n</html>\n");
    Html(page)
}
