//! Seed command runner.

use anyhow::Context;
use seed_populate_mysql::SeedReport;
use tracing::info;

use crate::config::SeedConfig;

/// Run the seeding workflow, or only describe it when `dry_run` is set.
pub async fn run_seed(config: &SeedConfig, dry_run: bool) -> anyhow::Result<Option<SeedReport>> {
    let connection = config.connection();
    let options = config.seed_options();

    if dry_run {
        options.validate().context("Invalid configuration")?;
        let user_plan = options.user_plan()?;
        let post_plan = options.post_plan()?;

        info!(
            "[DRY-RUN] Would seed database '{}' (seed={})",
            options.db_name, options.seed
        );
        info!("[DRY-RUN] Connection: {}", connection);
        info!(
            "[DRY-RUN] users: {} batches of {} ({} rows dropped)",
            user_plan.batches, user_plan.batch_size, user_plan.dropped
        );
        info!(
            "[DRY-RUN] posts: {} batches of {} ({} rows dropped)",
            post_plan.batches, post_plan.batch_size, post_plan.dropped
        );
        info!("[DRY-RUN] Configuration validated successfully");
        return Ok(None);
    }

    info!(
        "Seeding database '{}' with {} users and {} posts (batch size {}, seed={})",
        options.db_name,
        options.total_users,
        options.total_posts,
        options.batch_size,
        options.seed
    );

    let report = seed_populate_mysql::run(&connection, &options)
        .await
        .context("Seeding failed")?;

    info!(
        "Done: {} users in {:?}, {} posts in {:?}",
        report.users.rows_inserted,
        report.users.total_duration,
        report.posts.rows_inserted,
        report.posts.total_duration
    );

    Ok(Some(report))
}
