//! SeedTarget trait definition.
//!
//! The loader and the schema initializer only talk to the database through
//! this trait. `MySQLTarget` is the production implementation and
//! `testing::MemoryTarget` backs the tests.

use crate::insert::InsertBatch;

/// Boxed error returned by target implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A database the seeder can write to.
///
/// Implementations run statements one at a time in call order; every call
/// is committed on its own (autocommit).
#[async_trait::async_trait]
pub trait SeedTarget: Send {
    /// Execute a statement that returns no rows (DDL, `USE`).
    async fn execute(&mut self, sql: &str) -> Result<(), BoxError>;

    /// Submit one batch as a single multi-row INSERT.
    ///
    /// Returns the number of rows the server reports as inserted.
    async fn insert_batch(&mut self, batch: &InsertBatch) -> Result<u64, BoxError>;
}
