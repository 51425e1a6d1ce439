//! Entry points wrapped around the synthesis orchestrator
//!
//! This module contains:
//! - The HTTP request-response service and its health endpoint
//! - One-shot batch generation to a timestamped file
//! - Request body parsing with defaults
//! - The adjacency fingerprint report

/// One-shot generation to the output directory
pub mod batch;
/// HTTP router, handlers and server loop
pub mod http;
/// Adjacency fingerprint table for a tile set
pub mod report;
/// Generation request parsing and defaults
pub mod request;
