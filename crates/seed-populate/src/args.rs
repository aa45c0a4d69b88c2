//! Common CLI argument definitions shared by all populators.

use clap::Args;
use std::path::PathBuf;

/// Common arguments shared by all populators.
///
/// Every value is optional so that a flag only overrides the config file (or
/// the built-in default) when it was actually given.
#[derive(Args, Clone, Debug, Default)]
pub struct CommonSeedArgs {
    /// Path to a TOML config file
    #[arg(long, short = 'c', env = "SEED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of users to generate [default: 1000000]
    #[arg(long, env = "SEED_TOTAL_USERS")]
    pub total_users: Option<u64>,

    /// Number of posts to generate [default: 1000000]
    #[arg(long, env = "SEED_TOTAL_POSTS")]
    pub total_posts: Option<u64>,

    /// Rows per INSERT statement [default: 10000]
    #[arg(long, env = "SEED_BATCH_SIZE")]
    pub batch_size: Option<u64>,

    /// Random seed for deterministic generation (random when omitted)
    #[arg(long, env = "SEED_RANDOM_SEED")]
    pub seed: Option<u64>,

    /// Dry-run mode: validate configuration without touching the database
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonSeedArgs,
    }

    #[test]
    fn test_flags_are_optional() {
        let cli = TestCli::try_parse_from(["seed"]).unwrap();
        assert!(cli.common.config.is_none());
        assert!(cli.common.total_users.is_none());
        assert!(cli.common.batch_size.is_none());
        assert!(!cli.common.dry_run);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = TestCli::try_parse_from([
            "seed",
            "--total-users",
            "20",
            "--batch-size",
            "10",
            "--seed",
            "7",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.common.total_users, Some(20));
        assert_eq!(cli.common.total_posts, None);
        assert_eq!(cli.common.batch_size, Some(10));
        assert_eq!(cli.common.seed, Some(7));
        assert!(cli.common.dry_run);
    }
}
