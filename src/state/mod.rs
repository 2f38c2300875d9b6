//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data wrapped in `RwSignal` and provided through
//! Leptos context; components read them reactively.

pub mod render;
