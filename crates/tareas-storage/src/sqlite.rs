//! SQLite implementation of [`TareaStore`].
//!
//! [`SqliteStore`] persists tareas in a SQLite database with WAL mode and
//! automatic schema migrations. Every operation is a single statement; the
//! engine serializes concurrent writers at the file level.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::StorageError;
use crate::traits::TareaStore;
use crate::types::{Estado, Tarea, TareaId, TareaSummary};

/// SQLite-backed implementation of [`TareaStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    /// Deserializes an estado label produced by the listing query.
    fn str_to_estado(s: &str) -> Estado {
        match s {
            "Completado" => Estado::Completado,
            _ => Estado::Pendiente,
        }
    }
}

impl TareaStore for SqliteStore {
    fn create_tarea(&mut self, titulo: &str) -> Result<Tarea, StorageError> {
        self.conn.execute(
            "INSERT INTO tareas (titulo) VALUES (?1)",
            params![titulo],
        )?;
        let id = TareaId(self.conn.last_insert_rowid());
        // Re-read the created row so the returned Tarea reflects column
        // defaults rather than assumptions about them.
        self.get_tarea(id)?.ok_or(StorageError::TareaNotFound(id.0))
    }

    fn get_tarea(&self, id: TareaId) -> Result<Option<Tarea>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, titulo, completado FROM tareas WHERE id = ?1",
        )?;
        let tarea = stmt
            .query_row(params![id.0], |row| {
                let id: i64 = row.get(0)?;
                let titulo: String = row.get(1)?;
                let completado: i64 = row.get(2)?;
                Ok(Tarea {
                    id: TareaId(id),
                    titulo,
                    completado: completado != 0,
                })
            })
            .optional()?;
        Ok(tarea)
    }

    fn list_tareas(&self) -> Result<Vec<TareaSummary>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT
                id,
                titulo,
                CASE completado
                    WHEN 1 THEN 'Completado'
                    ELSE 'Pendiente'
                END AS estado
             FROM tareas
             ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let titulo: String = row.get(1)?;
            let estado: String = row.get(2)?;
            Ok((id, titulo, estado))
        })?;
        let mut result = Vec::new();
        for row in rows {
            let (id, titulo, estado) = row?;
            result.push(TareaSummary {
                id: TareaId(id),
                titulo,
                estado: Self::str_to_estado(&estado),
            });
        }
        Ok(result)
    }

    fn toggle_tarea(&mut self, id: TareaId) -> Result<usize, StorageError> {
        let changes = self.conn.execute(
            "UPDATE tareas
             SET completado = CASE completado WHEN 0 THEN 1 ELSE 0 END
             WHERE id = ?1",
            params![id.0],
        )?;
        if changes == 0 {
            return Err(StorageError::TareaNotFound(id.0));
        }
        Ok(changes)
    }

    fn delete_tarea(&mut self, id: TareaId) -> Result<usize, StorageError> {
        let changes = self
            .conn
            .execute("DELETE FROM tareas WHERE id = ?1", params![id.0])?;
        if changes == 0 {
            return Err(StorageError::TareaNotFound(id.0));
        }
        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteStore {
        SqliteStore::in_memory().unwrap()
    }

    #[test]
    fn create_assigns_id_and_defaults_pending() {
        let mut store = store();
        let tarea = store.create_tarea("Buy milk").unwrap();
        assert_eq!(tarea.titulo, "Buy milk");
        assert!(!tarea.completado);

        let listed = store.list_tareas().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].titulo, "Buy milk");
        assert_eq!(listed[0].estado, Estado::Pendiente);
    }

    #[test]
    fn ids_increase_monotonically_across_deletes() {
        let mut store = store();
        let a = store.create_tarea("a").unwrap();
        let b = store.create_tarea("b").unwrap();
        assert!(b.id.0 > a.id.0);

        // AUTOINCREMENT must not reuse the deleted high ID.
        store.delete_tarea(b.id).unwrap();
        let c = store.create_tarea("c").unwrap();
        assert!(c.id.0 > b.id.0);
    }

    #[test]
    fn toggle_flips_and_flips_back() {
        let mut store = store();
        let tarea = store.create_tarea("t").unwrap();

        assert_eq!(store.toggle_tarea(tarea.id).unwrap(), 1);
        assert!(store.get_tarea(tarea.id).unwrap().unwrap().completado);

        assert_eq!(store.toggle_tarea(tarea.id).unwrap(), 1);
        assert!(!store.get_tarea(tarea.id).unwrap().unwrap().completado);
    }

    #[test]
    fn toggle_missing_reports_not_found() {
        let mut store = store();
        let err = store.toggle_tarea(TareaId(99999)).unwrap_err();
        assert!(matches!(err, StorageError::TareaNotFound(99999)));
    }

    #[test]
    fn delete_removes_row() {
        let mut store = store();
        let tarea = store.create_tarea("t").unwrap();
        assert_eq!(store.delete_tarea(tarea.id).unwrap(), 1);
        assert!(store.get_tarea(tarea.id).unwrap().is_none());

        let err = store.delete_tarea(tarea.id).unwrap_err();
        assert!(matches!(err, StorageError::TareaNotFound(_)));
    }

    #[test]
    fn list_orders_by_id_and_derives_estado() {
        let mut store = store();
        let a = store.create_tarea("first").unwrap();
        let b = store.create_tarea("second").unwrap();
        store.toggle_tarea(b.id).unwrap();

        let listed = store.list_tareas().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, a.id);
        assert_eq!(listed[0].estado, Estado::Pendiente);
        assert_eq!(listed[1].id, b.id);
        assert_eq!(listed[1].estado, Estado::Completado);
    }
}
