//! Tarea management handlers (list, create, toggle, delete).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use tareas_storage::TareaId;

use crate::error::ApiError;
use crate::schema::tareas::{
    CreateTareaRequest, TareaSummaryView, TareaView, ToggleTareaResponse,
};
use crate::state::AppState;

/// Lists all tareas as a bare array of `{id, titulo, estado}`.
///
/// `GET /tareas`
pub async fn list_tareas(
    State(state): State<AppState>,
) -> Result<Json<Vec<TareaSummaryView>>, ApiError> {
    let service = state.service.lock().await;
    let tareas = service.list_tareas()?;
    Ok(Json(tareas.into_iter().map(TareaSummaryView::from).collect()))
}

/// Creates a new tarea from the request titulo.
///
/// `POST /tareas`
pub async fn create_tarea(
    State(state): State<AppState>,
    Json(req): Json<CreateTareaRequest>,
) -> Result<(StatusCode, Json<TareaView>), ApiError> {
    let mut service = state.service.lock().await;
    let tarea = service.create_tarea(&req.titulo)?;
    Ok((StatusCode::CREATED, Json(TareaView::from(tarea))))
}

/// Flips the completion flag of a tarea, returning update-result metadata
/// rather than the tarea itself.
///
/// `PUT /tareas/{id}`
pub async fn toggle_tarea(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ToggleTareaResponse>, ApiError> {
    let mut service = state.service.lock().await;
    let changes = service.toggle_tarea(TareaId(id))?;
    Ok(Json(ToggleTareaResponse { changes }))
}

/// Deletes a tarea. Success is 204 with an empty body.
///
/// `DELETE /tareas/{id}`
pub async fn delete_tarea(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut service = state.service.lock().await;
    service.delete_tarea(TareaId(id))?;
    Ok(StatusCode::NO_CONTENT)
}
