//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `errors` collapses failures into one
//! displayable message, and `types` defines the JSON schema shared with the
//! server.

pub mod api;
pub mod errors;
pub mod types;
