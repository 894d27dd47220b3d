//! HTTP middleware for request processing.
//!
//! Provides observability, CORS and error diagnostics middleware.

pub mod cors;
pub mod diagnostics;
pub mod tracing;
