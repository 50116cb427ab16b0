//! In-memory implementation of [`TareaStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and anywhere
//! persistence isn't needed. It stores rows in a `BTreeMap` with identical
//! semantics to the SQLite backend, including monotonic ID assignment that
//! never reuses an ID after a delete.

use std::collections::BTreeMap;

use crate::error::StorageError;
use crate::traits::TareaStore;
use crate::types::{Estado, Tarea, TareaId, TareaSummary};

/// Row payload for a single stored tarea.
#[derive(Debug, Clone)]
struct StoredTarea {
    titulo: String,
    completado: bool,
}

/// In-memory backend with BTreeMap-backed rows.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    /// Rows keyed by ID; BTreeMap iteration gives the ORDER BY id contract.
    tareas: BTreeMap<TareaId, StoredTarea>,
    /// Next ID to assign. Never decremented, matching AUTOINCREMENT.
    next_id: i64,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore::default()
    }
}

impl TareaStore for InMemoryStore {
    fn create_tarea(&mut self, titulo: &str) -> Result<Tarea, StorageError> {
        self.next_id += 1;
        let id = TareaId(self.next_id);
        self.tareas.insert(
            id,
            StoredTarea {
                titulo: titulo.to_string(),
                completado: false,
            },
        );
        Ok(Tarea {
            id,
            titulo: titulo.to_string(),
            completado: false,
        })
    }

    fn get_tarea(&self, id: TareaId) -> Result<Option<Tarea>, StorageError> {
        Ok(self.tareas.get(&id).map(|stored| Tarea {
            id,
            titulo: stored.titulo.clone(),
            completado: stored.completado,
        }))
    }

    fn list_tareas(&self) -> Result<Vec<TareaSummary>, StorageError> {
        Ok(self
            .tareas
            .iter()
            .map(|(id, stored)| TareaSummary {
                id: *id,
                titulo: stored.titulo.clone(),
                estado: Estado::from_completado(stored.completado),
            })
            .collect())
    }

    fn toggle_tarea(&mut self, id: TareaId) -> Result<usize, StorageError> {
        let stored = self
            .tareas
            .get_mut(&id)
            .ok_or(StorageError::TareaNotFound(id.0))?;
        stored.completado = !stored.completado;
        Ok(1)
    }

    fn delete_tarea(&mut self, id: TareaId) -> Result<usize, StorageError> {
        match self.tareas.remove(&id) {
            Some(_) => Ok(1),
            None => Err(StorageError::TareaNotFound(id.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_get_round_trip() {
        let mut store = InMemoryStore::new();
        let tarea = store.create_tarea("Buy milk").unwrap();
        assert!(!tarea.completado);

        let fetched = store.get_tarea(tarea.id).unwrap().unwrap();
        assert_eq!(fetched, tarea);
    }

    #[test]
    fn ids_never_reused_after_delete() {
        let mut store = InMemoryStore::new();
        let a = store.create_tarea("a").unwrap();
        store.delete_tarea(a.id).unwrap();
        let b = store.create_tarea("b").unwrap();
        assert!(b.id.0 > a.id.0);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut store = InMemoryStore::new();
        let tarea = store.create_tarea("t").unwrap();
        store.toggle_tarea(tarea.id).unwrap();
        store.toggle_tarea(tarea.id).unwrap();
        assert!(!store.get_tarea(tarea.id).unwrap().unwrap().completado);
    }

    #[test]
    fn missing_ids_report_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            store.toggle_tarea(TareaId(99999)),
            Err(StorageError::TareaNotFound(99999))
        ));
        assert!(matches!(
            store.delete_tarea(TareaId(99999)),
            Err(StorageError::TareaNotFound(99999))
        ));
        assert!(store.get_tarea(TareaId(99999)).unwrap().is_none());
    }

    #[test]
    fn list_matches_sqlite_semantics() {
        let mut store = InMemoryStore::new();
        let a = store.create_tarea("first").unwrap();
        let b = store.create_tarea("second").unwrap();
        store.toggle_tarea(a.id).unwrap();

        let listed = store.list_tareas().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, a.id);
        assert_eq!(listed[0].estado, Estado::Completado);
        assert_eq!(listed[1].id, b.id);
        assert_eq!(listed[1].estado, Estado::Pendiente);
    }
}
