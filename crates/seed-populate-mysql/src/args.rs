//! CLI argument definitions for the MySQL populator.

use clap::Args;

// Re-export CommonSeedArgs for convenience
pub use seed_populate::CommonSeedArgs;

/// MySQL-specific seed arguments.
///
/// Connection flags are optional; unset flags fall back to the config file
/// and then to the built-in defaults.
#[derive(Args, Clone, Debug, Default)]
pub struct MySQLSeedArgs {
    /// MySQL server host [default: localhost]
    #[arg(long, env = "MYSQL_HOST")]
    pub mysql_host: Option<String>,

    /// MySQL server port [default: 3306]
    #[arg(long, env = "MYSQL_PORT")]
    pub mysql_port: Option<u16>,

    /// MySQL user [default: gl_user]
    #[arg(long, env = "MYSQL_USER")]
    pub mysql_user: Option<String>,

    /// MySQL password [default: gl_password]
    #[arg(long, env = "MYSQL_PASSWORD", hide_env_values = true)]
    pub mysql_password: Option<String>,

    /// Database to create and fill [default: gl_db]
    #[arg(long, env = "MYSQL_DATABASE")]
    pub mysql_database: Option<String>,

    #[command(flatten)]
    pub common: CommonSeedArgs,
}
