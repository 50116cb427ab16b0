//! API schema types for request/response definitions.
//!
//! Each sub-module defines the request and response types for a specific
//! API domain. Types use serde derives for JSON serialization/deserialization
//! and explicit `From` mappings from the storage-layer row shapes.

pub mod meta;
pub mod tareas;
