//! Core module containing the property model, business rules and error types

pub mod entity;
pub mod error;
pub mod extractors;
pub mod mapper;
pub mod query;
pub mod repository;
pub mod service;
pub mod validation;

pub use entity::{Property, PropertyInput};
pub use error::{AppError, AppResult, ErrorCode, FieldError, ProblemDetail};
pub use query::{Page, Pageable, PropertyFilter, PropertyQuery, Sort, SortDirection, SortField};
pub use repository::PropertyRepository;
pub use service::{PropertyService, PropertyServiceImpl};
