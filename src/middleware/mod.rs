//! Middleware modules for request processing.
//!
//! This module contains middleware and extractors for the cross-cutting
//! stages of the pipeline:
//!
//! - [`auth`]: JWT authentication extractor
//! - [`role`]: Role-based authorization predicates
//! - [`audit`]: Per-request audit logging
//!
//! # Request Flow
//!
//! 1. Client sends a request with `Authorization: Bearer <token>` (or
//!    `x-access-token`)
//! 2. [`auth::AuthUser`] validates the JWT and extracts claims
//! 3. Role middleware checks the claim's role slug against the route's
//!    allowed roles (super admins always pass)
//! 4. The audit layer records the request and its outcome
//! 5. Handler executes if all checks pass
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn get_profile(auth_user: AuthUser) -> impl IntoResponse {
//!     let user_id = auth_user.user_id()?;
//!     // ...
//! }
//! ```

pub mod audit;
pub mod auth;
pub mod role;
