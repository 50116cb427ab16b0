//! HTTP handler modules for the tareas API.
//!
//! Each sub-module implements thin handlers that parse requests, acquire the
//! service lock, delegate to [`TareaService`](crate::service::TareaService),
//! and return JSON responses. No business logic lives in handlers.

pub mod meta;
pub mod tareas;
