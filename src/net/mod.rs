//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the JSON schema shared
//! with the backend. Components never touch `gloo-net` directly.

pub mod api;
pub mod types;
