//! Common types and utilities for fake-db-seed populators.
//!
//! This crate provides the argument types shared by the seeding CLI and the
//! database-specific populator crates.

pub mod args;

pub use args::CommonSeedArgs;
