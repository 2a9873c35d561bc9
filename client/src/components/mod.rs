//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form fields, auth forms, and page chrome. Per-form state
//! lives in `state::forms`; network calls stay in the pages that own them.

pub mod auth_form;
pub mod change_password_form;
pub mod flash_banner;
pub mod input;
pub mod items;
pub mod navbar;
pub mod password_input;
pub mod password_requirements;
pub mod profile_form;
pub mod sign_in_form;
pub mod sign_up_form;
