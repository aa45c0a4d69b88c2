//! Batch loader: generate a batch, submit it, repeat.

use crate::error::SeedError;
use crate::insert::{InsertBatch, MySQLRow};
use crate::target::SeedTarget;
use seed_generator::{GeneratorError, PostRecord, RecordGenerator, UserRecord};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

/// How a requested row count splits into full batches.
///
/// Only whole batches are inserted. The remainder `total % batch_size` is
/// dropped and reported in `dropped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    pub batch_size: u64,
    pub batches: u64,
    pub dropped: u64,
}

impl BatchPlan {
    pub fn new(total: u64, batch_size: u64) -> Result<Self, SeedError> {
        if batch_size == 0 {
            return Err(SeedError::Config("batch size must be at least 1".to_string()));
        }

        Ok(Self {
            batch_size,
            batches: total / batch_size,
            dropped: total % batch_size,
        })
    }

    /// Rows that will actually be inserted.
    pub fn rows(&self) -> u64 {
        self.batches * self.batch_size
    }
}

/// Loader state for one `populate_*` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Idle,
    Generating,
    Submitting,
    Complete,
    Failed,
}

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Table that was populated.
    pub table: String,
    /// Number of rows inserted.
    pub rows_inserted: u64,
    /// Number of batches executed.
    pub batch_count: u64,
    /// Requested rows left out because they did not fill a batch.
    pub rows_dropped: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent inserting data.
    pub insert_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Generates records and inserts them into a [`SeedTarget`] in fixed-size
/// batches, strictly one after another.
pub struct Populator<'a, T: SeedTarget + ?Sized> {
    target: &'a mut T,
    generator: RecordGenerator,
    batch_size: u64,
    state: LoaderState,
}

impl<'a, T: SeedTarget + ?Sized> Populator<'a, T> {
    pub fn new(target: &'a mut T, generator: RecordGenerator, batch_size: u64) -> Self {
        Self {
            target,
            generator,
            batch_size,
            state: LoaderState::Idle,
        }
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }

    pub fn generator(&self) -> &RecordGenerator {
        &self.generator
    }

    /// Insert `total / batch_size` full batches of users.
    pub async fn populate_users(&mut self, total: u64) -> Result<PopulateMetrics, SeedError> {
        self.load::<UserRecord, _>(total, |generator, count| generator.users(count))
            .await
    }

    /// Insert `total / batch_size` full batches of posts whose `user_id` is
    /// drawn uniformly from `[1, max_user_id]`.
    pub async fn populate_posts(
        &mut self,
        total: u64,
        max_user_id: u64,
    ) -> Result<PopulateMetrics, SeedError> {
        self.load::<PostRecord, _>(total, |generator, count| {
            generator.posts(count, max_user_id)
        })
        .await
    }

    async fn load<R, F>(&mut self, total: u64, mut generate: F) -> Result<PopulateMetrics, SeedError>
    where
        R: MySQLRow,
        F: FnMut(&mut RecordGenerator, usize) -> Result<Vec<R>, GeneratorError>,
    {
        let table = R::TABLE;
        let plan = BatchPlan::new(total, self.batch_size)?;
        self.transition(LoaderState::Idle);

        if plan.dropped > 0 {
            warn!(
                "{} requested rows for '{}' do not fill a batch of {} and will not be inserted",
                plan.dropped, table, plan.batch_size
            );
        }

        info!(
            "Populating table '{}' with {} rows ({} batches of {})",
            table,
            plan.rows(),
            plan.batches,
            plan.batch_size
        );

        let start_time = Instant::now();
        let mut metrics = PopulateMetrics {
            table: table.to_string(),
            rows_dropped: plan.dropped,
            ..Default::default()
        };

        for batch in 1..=plan.batches {
            // Generate rows
            self.transition(LoaderState::Generating);
            let gen_start = Instant::now();
            let records = match generate(&mut self.generator, plan.batch_size as usize) {
                Ok(records) => records,
                Err(e) => {
                    self.transition(LoaderState::Failed);
                    return Err(e.into());
                }
            };
            metrics.generation_duration += gen_start.elapsed();

            // Insert rows
            self.transition(LoaderState::Submitting);
            let insert = InsertBatch::from_records(records);
            let insert_start = Instant::now();
            let inserted = match self.target.insert_batch(&insert).await {
                Ok(inserted) => inserted,
                Err(source) => {
                    self.transition(LoaderState::Failed);
                    return Err(SeedError::Insert {
                        table: table.to_string(),
                        batch,
                        batches: plan.batches,
                        source,
                    });
                }
            };
            metrics.insert_duration += insert_start.elapsed();

            metrics.rows_inserted += inserted;
            metrics.batch_count += 1;
            self.transition(LoaderState::Idle);

            info!("{}: batch {}/{} inserted", table, batch, plan.batches);
            debug!(
                "Batch {} complete: {} rows inserted, {} total",
                batch, inserted, metrics.rows_inserted
            );
        }

        self.transition(LoaderState::Complete);
        metrics.total_duration = start_time.elapsed();

        info!(
            "Population of '{}' complete: {} rows in {:?} ({:.2} rows/sec)",
            table,
            metrics.rows_inserted,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    fn transition(&mut self, next: LoaderState) {
        trace!("loader state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
