//! Application state: plain structs with seed data and pure transitions.
//!
//! ARCHITECTURE
//! ============
//! Each page owns the state it declares; only session identity, UI chrome,
//! notifications, and the search registry are shared through context. State
//! structs stay free of browser types so every transition is unit-testable.

pub mod cases;
pub mod clients;
pub mod documents;
pub mod integrations;
pub mod notifications;
pub mod research;
pub mod session;
pub mod settings;
pub mod simulation;
pub mod ui;
