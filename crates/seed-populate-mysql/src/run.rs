//! The end-to-end seeding workflow.

use crate::connection::{ConnectionConfig, MySQLTarget};
use crate::error::SeedError;
use crate::insert::MySQLRow;
use crate::populator::{BatchPlan, PopulateMetrics, Populator};
use crate::schema::SchemaInitializer;
use crate::target::SeedTarget;
use seed_generator::{PostRecord, RecordGenerator, UserRecord};
use tracing::{info, warn};

/// What to create and how much of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOptions {
    pub db_name: String,
    pub total_users: u64,
    pub total_posts: u64,
    pub batch_size: u64,
    pub seed: u64,
}

impl SeedOptions {
    /// Reject option combinations that would fail part way through a run.
    pub fn validate(&self) -> Result<(), SeedError> {
        if self.batch_size == 0 {
            return Err(SeedError::Config("batch size must be at least 1".to_string()));
        }

        let max = UserRecord::max_batch_size().min(PostRecord::max_batch_size());
        if self.batch_size > max {
            return Err(SeedError::Config(format!(
                "batch size {} exceeds the MySQL placeholder limit (max {max})",
                self.batch_size
            )));
        }

        if self.total_posts > 0 && self.total_users == 0 {
            return Err(SeedError::Config(
                "posts need at least one user to reference".to_string(),
            ));
        }

        SchemaInitializer::new(self.db_name.clone())?;
        Ok(())
    }

    pub fn user_plan(&self) -> Result<BatchPlan, SeedError> {
        BatchPlan::new(self.total_users, self.batch_size)
    }

    pub fn post_plan(&self) -> Result<BatchPlan, SeedError> {
        BatchPlan::new(self.total_posts, self.batch_size)
    }
}

/// Metrics for both tables of a finished run.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub users: PopulateMetrics,
    pub posts: PopulateMetrics,
}

/// Initialize the schema, then load users, then posts.
///
/// Post `user_id` values are drawn from `[1, total_users]`, which assumes the
/// `users` table was empty and every user batch got dense ids from 1.
pub async fn seed<T: SeedTarget + ?Sized>(
    target: &mut T,
    opts: &SeedOptions,
) -> Result<SeedReport, SeedError> {
    opts.validate()?;
    seed_validated(target, opts).await
}

async fn seed_validated<T: SeedTarget + ?Sized>(
    target: &mut T,
    opts: &SeedOptions,
) -> Result<SeedReport, SeedError> {
    SchemaInitializer::new(opts.db_name.clone())?
        .initialize(&mut *target)
        .await?;

    let generator = RecordGenerator::new(opts.seed);
    let mut populator = Populator::new(target, generator, opts.batch_size);

    info!("Inserting users...");
    let users = populator.populate_users(opts.total_users).await?;
    info!("Users inserted");

    info!("Inserting posts...");
    let posts = populator
        .populate_posts(opts.total_posts, opts.total_users)
        .await?;
    info!("Posts inserted");

    Ok(SeedReport { users, posts })
}

/// Connect, [`seed`], and always close the connection afterwards.
///
/// Options are validated once, before connecting. A failure to close is
/// logged and never replaces the seeding result.
pub async fn run(connection: &ConnectionConfig, opts: &SeedOptions) -> Result<SeedReport, SeedError> {
    opts.validate()?;

    let mut target = MySQLTarget::connect(connection).await?;
    let outcome = seed_validated(&mut target, opts).await;

    if let Err(e) = target.close().await {
        warn!("Failed to close MySQL connection cleanly: {}", e);
    }

    outcome
}
