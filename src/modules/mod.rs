//! Feature modules.
//!
//! Each module owns one resource family and follows the same layout:
//! `router.rs` wires the routes, `controller.rs` holds the HTTP handlers,
//! `service.rs` the database logic, and `model.rs` re-exports the module's
//! models from `scholaris-models`.

pub mod auth;
pub mod branches;
pub mod classes;
pub mod fees;
pub mod roles;
pub mod sections;
pub mod students;
pub mod users;
