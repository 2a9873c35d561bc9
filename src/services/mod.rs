//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on protocol translation and status mapping.

pub mod account;
pub mod auth;
pub mod password;
pub mod session;
