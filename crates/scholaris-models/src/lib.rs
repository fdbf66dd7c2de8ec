//! # Scholaris Models
//!
//! Domain models and DTOs for the Scholaris API.
//!
//! Each module covers one resource family: the database entity, its
//! create/update DTOs with `validator` derives, and the allow-list of
//! columns its list endpoint accepts as filters.
//!
//! - [`branches`]: School branches (campuses)
//! - [`classes`]: Classes within a branch
//! - [`sections`]: Sections within a class
//! - [`students`]: Student records
//! - [`fees`]: Fees and fee types
//! - [`roles`]: Roles and role groups
//! - [`users`]: Staff/admin user accounts
//! - [`auth`]: Login and token DTOs

pub mod auth;
pub mod branches;
pub mod classes;
pub mod fees;
pub mod roles;
pub mod sections;
pub mod students;
pub mod users;
