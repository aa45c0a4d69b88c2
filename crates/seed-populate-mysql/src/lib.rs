//! MySQL populator for fake-db-seed.
//!
//! Opens a single autocommit connection, creates the `users` and `posts`
//! tables if they are missing, then fills them with batched multi-row
//! INSERTs of generated records.
//!
//! ```text
//! MySQLTarget::connect ─▶ SchemaInitializer ─▶ Populator(users) ─▶ Populator(posts) ─▶ close
//! ```
//!
//! All database access goes through the [`SeedTarget`] trait so the loader
//! can run against [`testing::MemoryTarget`] in tests.

pub mod args;
pub mod connection;
pub mod error;
pub mod insert;
pub mod populator;
pub mod run;
pub mod schema;
pub mod target;
pub mod testing;

pub use args::MySQLSeedArgs;
pub use connection::{ConnectionConfig, MySQLTarget};
pub use error::SeedError;
pub use insert::{InsertBatch, MySQLRow, MAX_PLACEHOLDERS};
pub use populator::{BatchPlan, LoaderState, PopulateMetrics, Populator};
pub use run::{run, seed, SeedOptions, SeedReport};
pub use schema::SchemaInitializer;
pub use target::{BoxError, SeedTarget};
