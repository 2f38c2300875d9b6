//! Networking for the image-generation endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `api` the HTTP transport, and `dispatch`
//! ties a transport to UI state for one request/response cycle.

pub mod api;
pub mod dispatch;
pub mod types;
