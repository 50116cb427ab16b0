//! Service metadata response types.

use serde::Serialize;

/// A bare `{"mensaje": ...}` response body.
#[derive(Debug, Clone, Serialize)]
pub struct MensajeResponse {
    /// Human-readable message.
    pub mensaje: String,
}
