//! Roles and role groups.
//!
//! Both route trees are super-admin only. Role slugs are derived from the
//! role name on create and regenerated when the name changes; the
//! authorization middleware consumes the slug carried in each JWT.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
