//! Tarea management request/response types.

use serde::{Deserialize, Serialize};

use tareas_storage::{Estado, Tarea, TareaId, TareaSummary};

/// Request to create a new tarea.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTareaRequest {
    /// The text for the new tarea.
    pub titulo: String,
}

/// Full tarea view, returned from creation.
#[derive(Debug, Clone, Serialize)]
pub struct TareaView {
    /// The assigned tarea identifier.
    pub id: TareaId,
    /// The tarea text.
    pub titulo: String,
    /// Completion flag.
    pub completado: bool,
}

impl From<Tarea> for TareaView {
    fn from(tarea: Tarea) -> Self {
        TareaView {
            id: tarea.id,
            titulo: tarea.titulo,
            completado: tarea.completado,
        }
    }
}

/// Listing view of a tarea with the derived estado label.
#[derive(Debug, Clone, Serialize)]
pub struct TareaSummaryView {
    /// Tarea identifier.
    pub id: TareaId,
    /// The tarea text.
    pub titulo: String,
    /// `"Completado"` or `"Pendiente"`.
    pub estado: Estado,
}

impl From<TareaSummary> for TareaSummaryView {
    fn from(summary: TareaSummary) -> Self {
        TareaSummaryView {
            id: summary.id,
            titulo: summary.titulo,
            estado: summary.estado,
        }
    }
}

/// Update-result metadata returned from toggling a tarea.
#[derive(Debug, Clone, Serialize)]
pub struct ToggleTareaResponse {
    /// Number of rows affected by the update statement.
    pub changes: usize,
}
