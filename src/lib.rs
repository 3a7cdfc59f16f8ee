//! # Estate-RS
//!
//! A REST service for managing real-estate property listings.
//!
//! ## Features
//!
//! - **CRUD**: create, read, replace and delete properties under `/properties`
//! - **Filtered Listing**: location substring, minimum price and minimum size
//! - **Pagination**: Spring-style page envelopes with `page`, `size` and `sort`
//! - **Validation**: field-level errors collected before any business rule runs
//! - **Problem Bodies**: every failure is an `application/problem+json` response
//! - **Pluggable Storage**: in-memory by default, PostgreSQL behind a feature flag
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use estate::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_repository(InMemoryPropertyRepository::new())
//!         .serve("127.0.0.1:8080")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::{Property, PropertyInput},
        error::{AppError, AppResult, ErrorCode, FieldError, ProblemDetail},
        mapper::to_property,
        query::{Page, Pageable, PropertyFilter, PropertyQuery, Sort, SortDirection, SortField},
        repository::PropertyRepository,
        service::{PropertyService, PropertyServiceImpl},
        validation::{FieldRules, ValidatedInput, ValidatedJson},
    };

    // === Storage ===
    pub use crate::storage::InMemoryPropertyRepository;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresPropertyRepository;

    // === Config ===
    pub use crate::config::{AppConfig, PaginationConfig, ServerConfig, StorageBackend, StorageConfig};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::Router;
}
