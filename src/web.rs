//! Read-only web view of the atlas.
//!
//! Serves the Leaflet page built by [`render_atlas_page`] plus the raw
//! memory list. Every request reads the store afresh; nothing is written.

use crate::config::ResolvedConfig;
use crate::controller::AtlasController;
use crate::error::Result;
use crate::map::LeafletMap;
use crate::storage::{FileSlot, MemoryStore};
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use std::sync::Arc;

pub const PAGE_TITLE: &str = "Sentimental Atlas";

pub fn open_store(resolved: &ResolvedConfig) -> MemoryStore<FileSlot> {
    MemoryStore::with_key(
        FileSlot::new(&resolved.data_dir),
        resolved.config.atlas.storage_key.clone(),
    )
}

/// Renders every stored memory onto a Leaflet page.
pub fn render_atlas_page(resolved: &ResolvedConfig) -> Result<String> {
    let map_settings = &resolved.config.map;
    let canvas = LeafletMap::new(map_settings.initial_view()?, map_settings.tile_layer());

    let mut controller = AtlasController::new(open_store(resolved), canvas);
    controller.start();
    Ok(controller.canvas().to_document(PAGE_TITLE))
}

pub struct AppState {
    pub resolved: ResolvedConfig,
}

pub fn router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(atlas_page))
        .route("/memories.json", axum::routing::get(memories_json))
        .with_state(state)
}

pub async fn run_server(resolved: ResolvedConfig, port: u16) -> std::io::Result<()> {
    let state = Arc::new(AppState { resolved });
    let app = router(state);

    let addr = format!("127.0.0.1:{}", port);
    tracing::info!("Atlas viewer listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await
}

// GET /
async fn atlas_page(State(state): State<Arc<AppState>>) -> Response {
    match render_atlas_page(&state.resolved) {
        Ok(page) => ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], page).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render atlas page");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

// GET /memories.json
async fn memories_json(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(open_store(&state.resolved).list())
}
