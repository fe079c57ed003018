//! # Connector Layer
//!
//! Adapters for the outside world: the Groq completion client and the HTTP API.

pub mod adapter;
pub mod api;

pub use adapter::*;
