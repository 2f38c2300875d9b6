//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write shared state from Leptos context providers; the
//! page wires them together.

pub mod map_host;
pub mod mode_picker;
pub mod result_view;
