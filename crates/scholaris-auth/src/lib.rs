//! # Scholaris Auth
//!
//! Authentication types and JWT utilities for the Scholaris API.
//!
//! This crate provides:
//!
//! - [`claims`]: JWT claim structures for access and refresh tokens
//! - [`jwt`]: Token creation and verification utilities
//!
//! # Token Types
//!
//! - **Access Token** ([`Claims`]): Short-lived token carrying the caller's
//!   identity and role slug, used on every authenticated request.
//! - **Refresh Token** ([`RefreshTokenClaims`]): Long-lived token exchanged
//!   for a fresh access token at `/api/auth/refresh`.
//!
//! # Example
//!
//! ```ignore
//! use scholaris_auth::{create_access_token, verify_token};
//! use scholaris_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "user@example.com", "admin", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.role, "admin");
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, RefreshTokenClaims};
pub use jwt::{create_access_token, create_refresh_token, verify_refresh_token, verify_token};
