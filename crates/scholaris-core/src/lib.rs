//! # Scholaris Core
//!
//! Core types, errors, and utilities for the Scholaris API.
//!
//! This crate provides foundational types used throughout the Scholaris
//! application:
//!
//! - [`errors`]: Application error types with HTTP response conversion
//! - [`pagination`]: Pagination utilities for API responses
//! - [`filters`]: Allow-listed query-string filter construction
//! - [`password`]: Secure password hashing and verification
//! - [`serde`]: Custom serde serialization/deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use scholaris_core::errors::AppError;
//! use scholaris_core::pagination::{PaginationParams, PaginationMeta};
//! use scholaris_core::password::{hash_password, verify_password};
//!
//! // Create an error
//! let error = AppError::not_found(anyhow::anyhow!("Student not found"));
//!
//! // Hash a password
//! let hash = hash_password("secure_password")?;
//!
//! // Use pagination
//! let params = PaginationParams::default();
//! let limit = params.limit();
//! ```

pub mod errors;
pub mod filters;
pub mod pagination;
pub mod password;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use filters::{AllowedField, FieldKind, FilterSet};
pub use pagination::{Paginated, PaginationMeta, PaginationParams};
pub use password::{hash_password, verify_password};
