//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `flash`, `forms`) so components depend
//! on small focused models that can be unit tested without a browser.

pub mod auth;
pub mod flash;
pub mod forms;
