//! fake-db-seed library
//!
//! Populates a MySQL database with synthetic users and posts for load and
//! volume testing.
//!
//! # Workflow
//!
//! 1. Connect once, with autocommit enabled
//! 2. Create the database and the `users` / `posts` tables if absent
//! 3. Insert users in fixed-size multi-row batches
//! 4. Insert posts whose `user_id` points into the user id range
//! 5. Close the connection, on success and on failure
//!
//! The MySQL specifics live in `seed_populate_mysql`; record generation lives
//! in `seed_generator`. This crate adds configuration loading, logging setup
//! and the command runner used by the binary.

pub mod config;
pub mod logging;
pub mod seed;

pub use config::SeedConfig;
pub use seed::run_seed;
