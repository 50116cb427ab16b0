//! Storage-layer types for tarea identity and row shapes.
//!
//! [`TareaId`] is a storage concern -- tareas only gain an ID when persisted.
//! [`TareaSummary`] is the derived listing shape, with [`Estado`] standing in
//! for the raw completion flag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored tarea.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TareaId(pub i64);

impl fmt::Display for TareaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TareaId({})", self.0)
    }
}

/// A persisted tarea record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tarea {
    /// Tarea identifier.
    pub id: TareaId,
    /// The tarea text, set at creation and never modified.
    pub titulo: String,
    /// Completion flag, false at creation, flipped by toggle.
    pub completado: bool,
}

/// Display label derived from the completion flag.
///
/// Serializes as the literal strings `"Completado"` / `"Pendiente"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Estado {
    /// The tarea is done (`completado = true`).
    Completado,
    /// The tarea is still open (`completado = false`).
    Pendiente,
}

impl Estado {
    /// Derives the label from a completion flag.
    pub fn from_completado(completado: bool) -> Self {
        if completado {
            Estado::Completado
        } else {
            Estado::Pendiente
        }
    }

    /// The label as stored/emitted text.
    pub fn as_str(self) -> &'static str {
        match self {
            Estado::Completado => "Completado",
            Estado::Pendiente => "Pendiente",
        }
    }
}

impl fmt::Display for Estado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a stored tarea (for listing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TareaSummary {
    /// Tarea identifier.
    pub id: TareaId,
    /// The tarea text.
    pub titulo: String,
    /// Derived display label.
    pub estado: Estado,
}
