//! Seeding configuration.
//!
//! Values are resolved in order of precedence: command-line flag (or its
//! environment variable), then the TOML file given with `--config`, then the
//! built-in defaults below.
//!
//! ```toml
//! host = "localhost"
//! port = 3306
//! user = "gl_user"
//! password = "gl_password"
//! db_name = "gl_db"
//! total_users = 1000000
//! total_posts = 1000000
//! batch_size = 10000
//! seed = 42
//! ```

use anyhow::Context;
use seed_populate_mysql::{ConnectionConfig, MySQLSeedArgs, SeedOptions};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_USER: &str = "gl_user";
pub const DEFAULT_PASSWORD: &str = "gl_password";
pub const DEFAULT_DB_NAME: &str = "gl_db";
pub const DEFAULT_TOTAL_USERS: u64 = 1_000_000;
pub const DEFAULT_TOTAL_POSTS: u64 = 1_000_000;
pub const DEFAULT_BATCH_SIZE: u64 = 10_000;

/// Everything a seeding run needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub db_name: String,
    pub total_users: u64,
    pub total_posts: u64,
    pub batch_size: u64,
    /// Random seed; a fresh one is drawn on load when unset.
    pub seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            db_name: DEFAULT_DB_NAME.to_string(),
            total_users: DEFAULT_TOTAL_USERS,
            total_posts: DEFAULT_TOTAL_POSTS,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
        }
    }
}

impl SeedConfig {
    /// Parse a TOML config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path:?}"))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file {path:?}"))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve the final configuration for a run and fix the seed.
    pub fn load(args: &MySQLSeedArgs) -> anyhow::Result<Self> {
        let mut config = match &args.common.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        if config.seed.is_none() {
            config.seed = Some(rand::random());
        }
        Ok(config)
    }

    /// Overwrite every field for which a flag was given.
    pub fn apply_args(&mut self, args: &MySQLSeedArgs) {
        if let Some(host) = &args.mysql_host {
            self.host = host.clone();
        }
        if let Some(port) = args.mysql_port {
            self.port = port;
        }
        if let Some(user) = &args.mysql_user {
            self.user = user.clone();
        }
        if let Some(password) = &args.mysql_password {
            self.password = password.clone();
        }
        if let Some(db_name) = &args.mysql_database {
            self.db_name = db_name.clone();
        }
        if let Some(total_users) = args.common.total_users {
            self.total_users = total_users;
        }
        if let Some(total_posts) = args.common.total_posts {
            self.total_posts = total_posts;
        }
        if let Some(batch_size) = args.common.batch_size {
            self.batch_size = batch_size;
        }
        if let Some(seed) = args.common.seed {
            self.seed = Some(seed);
        }
    }

    pub fn connection(&self) -> ConnectionConfig {
        ConnectionConfig {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }

    pub fn seed_options(&self) -> SeedOptions {
        SeedOptions {
            db_name: self.db_name.clone(),
            total_users: self.total_users,
            total_posts: self.total_posts,
            batch_size: self.batch_size,
            seed: self.seed.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SeedConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.user, "gl_user");
        assert_eq!(config.db_name, "gl_db");
        assert_eq!(config.total_users, 1_000_000);
        assert_eq!(config.batch_size, 10_000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SeedConfig::from_toml(
            r#"
host = "db.internal"
total_users = 20
batch_size = 10
"#,
        )
        .unwrap();

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.total_users, 20);
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.port, 3306);
        assert_eq!(config.total_posts, 1_000_000);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(SeedConfig::from_toml("hostname = \"x\"").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "db_name = \"from_file\"\ntotal_posts = 500\nbatch_size = 50\nseed = 1"
        )
        .unwrap();

        let mut args = MySQLSeedArgs::default();
        args.common.config = Some(file.path().to_path_buf());
        args.common.batch_size = Some(25);
        args.mysql_user = Some("root".to_string());

        let config = SeedConfig::load(&args).unwrap();

        assert_eq!(config.db_name, "from_file");
        assert_eq!(config.total_posts, 500);
        assert_eq!(config.batch_size, 25);
        assert_eq!(config.user, "root");
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut args = MySQLSeedArgs::default();
        args.common.config = Some("/nonexistent/seed.toml".into());
        assert!(SeedConfig::load(&args).is_err());
    }

    #[test]
    fn test_load_fixes_seed() {
        let config = SeedConfig::load(&MySQLSeedArgs::default()).unwrap();
        assert!(config.seed.is_some());
        assert_eq!(config.seed_options().seed, config.seed.unwrap());
    }

    #[test]
    fn test_conversions() {
        let config = SeedConfig {
            seed: Some(9),
            ..Default::default()
        };

        let connection = config.connection();
        assert_eq!(connection.host, "localhost");
        assert_eq!(connection.password, "gl_password");

        let options = config.seed_options();
        assert_eq!(options.db_name, "gl_db");
        assert_eq!(options.total_posts, 1_000_000);
        assert_eq!(options.seed, 9);
    }
}
