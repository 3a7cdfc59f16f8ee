//! Server module for building the property HTTP application
//!
//! This module provides a `ServerBuilder` that registers:
//! - CRUD and listing routes for `/properties`
//! - Health check routes
//! - Tracing, CORS and panic-to-problem middleware

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
