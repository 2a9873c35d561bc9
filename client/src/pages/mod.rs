//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (submission state, API calls,
//! navigation) and delegates rendering details to `components`.

pub mod account;
pub mod home;
pub mod items;
pub mod landing;
pub mod not_found;
pub mod sign_in;
pub mod sign_up;
