//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome while reading/writing shared state
//! from Leptos context providers; page-specific layout stays in `pages`.

pub mod navbar;
pub mod sidebar;
pub mod stat_card;
