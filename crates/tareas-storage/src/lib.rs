//! Storage abstraction for tarea records.
//!
//! Provides the [`TareaStore`] trait defining the storage contract that all
//! backends implement, plus [`InMemoryStore`] and [`SqliteStore`] as
//! first-class backends.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: TareaId, Tarea, TareaSummary storage-layer types
//! - [`traits`]: TareaStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: SQL schema constants and migration setup
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::TareaStore;
pub use types::{Estado, Tarea, TareaId, TareaSummary};
