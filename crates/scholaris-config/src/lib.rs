//! # Scholaris Config
//!
//! Configuration types for the Scholaris API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: JWT authentication configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`rate_limit`]: API rate limiting configuration
//! - [`audit`]: Audit logging configuration
//! - [`server`]: Bind address configuration
//!
//! # Example
//!
//! ```ignore
//! use scholaris_config::{JwtConfig, CorsConfig, RateLimitConfig, AuditConfig};
//!
//! // Load all configs from environment
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let rate_limit_config = RateLimitConfig::from_env();
//! let audit_config = AuditConfig::from_env();
//! ```

pub mod audit;
pub mod cors;
pub mod jwt;
pub mod rate_limit;
pub mod server;

// Re-export commonly used types at crate root
pub use audit::AuditConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;
