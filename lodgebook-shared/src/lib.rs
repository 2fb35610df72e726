//! # Lodgebook Shared Library
//!
//! This crate contains the data layer and business logic shared by the
//! Lodgebook binaries (API server and seed tool).
//!
//! ## Module Organization
//!
//! - `db`: connection pool, migrations, and seed data
//! - `models`: database models and their CRUD operations
//! - `billing`: per-tenant due computation
//! - `occupancy`: the occupy-bed transaction

pub mod billing;
pub mod db;
pub mod models;
pub mod occupancy;

/// Current version of the Lodgebook shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
