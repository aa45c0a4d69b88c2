//! Error types for the MySQL populator.

use crate::target::BoxError;
use seed_generator::GeneratorError;
use thiserror::Error;

/// Errors that can occur while seeding MySQL. All of them are fatal.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Cannot reach or authenticate to the server.
    #[error("MySQL connection error: {0}")]
    Connection(#[source] mysql_async::Error),

    /// A DDL statement failed.
    #[error("Schema error while running `{statement}`: {source}")]
    Schema {
        statement: String,
        #[source]
        source: BoxError,
    },

    /// The unique email space ran out before the requested count.
    #[error("Exhaustion error: {0}")]
    Exhaustion(#[source] GeneratorError),

    /// Any other generator failure.
    #[error("Generator error: {0}")]
    Generator(#[source] GeneratorError),

    /// A batch INSERT failed. Batches before it stay committed.
    #[error("Insert error on `{table}` batch {batch}/{batches}: {source}")]
    Insert {
        table: String,
        batch: u64,
        batches: u64,
        #[source]
        source: BoxError,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<GeneratorError> for SeedError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::Exhausted { .. } => SeedError::Exhaustion(err),
            other => SeedError::Generator(other),
        }
    }
}
