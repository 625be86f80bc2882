// Library crate for the motion study backend
// Exports modules for use by the server binary and tests

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod state;

use axum::handler::HandlerWithoutStateExt;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{
    delete_project, get_project, list_projects, resource_not_found, save_project,
};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    // Everything outside /api is served from the static directory, with the
    // front-end entry document at the root; missing files and unmapped
    // paths share the JSON 404.
    let static_files = ServeDir::new(&state.config.static_dir)
        .not_found_service(resource_not_found.into_service());

    Router::new()
        // Project routes
        .route("/api/save-project", post(save_project))
        .route("/api/projects", get(list_projects))
        .route("/api/projects/{id}", get(get_project))
        .route("/api/projects/{id}", delete(delete_project))
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
