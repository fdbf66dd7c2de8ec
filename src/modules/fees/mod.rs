//! Fees and fee types.
//!
//! This module serves two route trees: `/api/fees` for individual fee
//! records and `/api/fee-types` for the fee categories they reference.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
