//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its orchestration and delegates rendering details to
//! `components`.

pub mod generator;
