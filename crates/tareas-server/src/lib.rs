//! HTTP/JSON API server for tarea tracking.
//!
//! Exposes a REST API for creating, listing, toggling, and deleting tareas
//! backed by `tareas-storage`. This crate contains the server framework,
//! API schema types, error handling, and route definitions.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
