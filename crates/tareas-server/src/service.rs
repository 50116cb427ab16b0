//! TareaService: the single coordinator between HTTP handlers and storage.
//!
//! All business logic flows through [`TareaService`]. Handlers are thin
//! wrappers that delegate to these methods. The only logic above the storage
//! contract is the titulo presence check on create.

use tareas_storage::{SqliteStore, Tarea, TareaId, TareaStore, TareaSummary};

use crate::error::ApiError;

/// The central service coordinating tarea operations against storage.
pub struct TareaService {
    /// SQLite storage backend for persistence.
    store: SqliteStore,
}

impl TareaService {
    /// Creates a new TareaService, opening a SQLite database at `db_path`.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path)
            .map_err(|e| ApiError::Internal(format!("failed to open store: {}", e)))?;
        Ok(TareaService { store })
    }

    /// Creates a TareaService backed by an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let store = SqliteStore::in_memory()
            .map_err(|e| ApiError::Internal(format!("failed to open store: {}", e)))?;
        Ok(TareaService { store })
    }

    /// Creates a tarea after enforcing the titulo presence check.
    ///
    /// Storage accepts any text; rejecting blank titulos is this layer's
    /// responsibility.
    pub fn create_tarea(&mut self, titulo: &str) -> Result<Tarea, ApiError> {
        if titulo.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "El titulo no puede estar vacio".to_string(),
            ));
        }
        Ok(self.store.create_tarea(titulo)?)
    }

    /// Lists all tareas with their derived estado labels.
    pub fn list_tareas(&self) -> Result<Vec<TareaSummary>, ApiError> {
        Ok(self.store.list_tareas()?)
    }

    /// Flips the completion flag of a tarea, returning the affected-row count.
    pub fn toggle_tarea(&mut self, id: TareaId) -> Result<usize, ApiError> {
        Ok(self.store.toggle_tarea(id)?)
    }

    /// Deletes a tarea, returning the affected-row count.
    pub fn delete_tarea(&mut self, id: TareaId) -> Result<usize, ApiError> {
        Ok(self.store.delete_tarea(id)?)
    }
}
