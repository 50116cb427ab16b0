//! Application state with shared `TareaService` for concurrent access.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Uses `tokio::sync::Mutex` (async-aware) instead of
//! `std::sync::Mutex` (blocking) so handlers await the lock without blocking
//! the tokio runtime. `TareaService` contains `rusqlite::Connection` which is
//! `!Sync`, so an `RwLock` is not an option here.

use std::sync::Arc;

use crate::error::ApiError;
use crate::service::TareaService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared tarea service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<TareaService>>,
}

impl AppState {
    /// Creates a new `AppState` with a `TareaService` backed by the given
    /// SQLite database path.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let service = TareaService::new(db_path)?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        })
    }

    /// Creates a new `AppState` with an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let service = TareaService::in_memory()?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        })
    }
}
