//! # tome-observability
//!
//! Structured logging for the engine: subscriber installation, span macros
//! per operation, and typed event helpers so field names stay consistent.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_from_config, init_tracing_with_filter};
