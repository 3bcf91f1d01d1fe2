//! Networking modules for the Ratio REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `envelope` turns response bodies into
//! `Result`s, and `types` defines the wire schema.

pub mod api;
pub mod envelope;
pub mod types;
