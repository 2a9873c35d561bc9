//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, runtime
//! config, routing rules) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod config;
pub mod storage;
pub mod token;
pub mod validation;
