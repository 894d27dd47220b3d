//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses as envelopes (see [`crate::response`]).
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Extractors whose rejections are rendered as error envelopes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing, CORS and diagnostics middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
