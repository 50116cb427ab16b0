//! The [`TareaStore`] trait defining the storage contract for tareas.
//!
//! Each method maps to exactly one row-level operation; there are no
//! transactions spanning multiple statements. All backends (InMemoryStore,
//! SqliteStore) implement this trait, ensuring they are fully swappable
//! without changing service logic.

use crate::error::StorageError;
use crate::types::{Tarea, TareaId, TareaSummary};

/// The storage contract for tarea records.
///
/// The trait is synchronous (not async) for simplicity in the current
/// single-connection design.
pub trait TareaStore {
    /// Inserts a new tarea with the given titulo.
    ///
    /// The ID is assigned by the backend and increases monotonically within
    /// one database lifetime. The created row has `completado = false`.
    /// Titulo presence is a caller concern; this layer does not enforce it.
    fn create_tarea(&mut self, titulo: &str) -> Result<Tarea, StorageError>;

    /// Point lookup by ID. Absence is not an error.
    fn get_tarea(&self, id: TareaId) -> Result<Option<Tarea>, StorageError>;

    /// Lists all tareas with the derived estado label, ordered by ID.
    fn list_tareas(&self) -> Result<Vec<TareaSummary>, StorageError>;

    /// Flips `completado` for the matching row in a single statement.
    ///
    /// Returns the affected-row count. Reports
    /// [`StorageError::TareaNotFound`] when no row matches.
    fn toggle_tarea(&mut self, id: TareaId) -> Result<usize, StorageError>;

    /// Deletes the matching row.
    ///
    /// Returns the affected-row count. Reports
    /// [`StorageError::TareaNotFound`] when no row matches.
    fn delete_tarea(&mut self, id: TareaId) -> Result<usize, StorageError>;
}
