//! Service metadata handlers.

use axum::Json;

use crate::schema::meta::MensajeResponse;

/// Confirms the API is running, regardless of database state.
///
/// `GET /`
pub async fn root() -> Json<MensajeResponse> {
    Json(MensajeResponse {
        mensaje: "Api de tareas funcionando".to_string(),
    })
}
