//! Router assembly for the tareas HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
/// CORS is permissive (clients may call from various origins).
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::meta::root))
        .route(
            "/tareas",
            get(handlers::tareas::list_tareas)
                .post(handlers::tareas::create_tarea),
        )
        .route(
            "/tareas/{id}",
            put(handlers::tareas::toggle_tarea)
                .delete(handlers::tareas::delete_tarea),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
