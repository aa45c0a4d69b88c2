//! Idempotent database and table creation.

use crate::error::SeedError;
use crate::target::SeedTarget;
use tracing::{debug, info};

/// DDL for the `users` table.
pub const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS `users` (
    `id` BIGINT AUTO_INCREMENT PRIMARY KEY,
    `name` VARCHAR(100),
    `email` VARCHAR(150),
    `created_at` TIMESTAMP DEFAULT CURRENT_TIMESTAMP
) ENGINE=InnoDB";

/// DDL for the `posts` table. `user_id` is indexed but not a foreign key.
pub const CREATE_POSTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS `posts` (
    `id` BIGINT AUTO_INCREMENT PRIMARY KEY,
    `user_id` BIGINT,
    `title` VARCHAR(255),
    `content` TEXT,
    `created_at` TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    INDEX (`user_id`)
) ENGINE=InnoDB";

/// Longest identifier MySQL accepts for a database name.
const MAX_IDENTIFIER_LEN: usize = 64;

/// Creates the target database and both tables when absent.
#[derive(Debug, Clone)]
pub struct SchemaInitializer {
    db_name: String,
}

impl SchemaInitializer {
    pub fn new(db_name: impl Into<String>) -> Result<Self, SeedError> {
        let db_name = db_name.into();
        validate_identifier(&db_name)?;
        Ok(Self { db_name })
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    /// Statements in execution order.
    pub fn statements(&self) -> Vec<String> {
        vec![
            format!("CREATE DATABASE IF NOT EXISTS `{}`", self.db_name),
            format!("USE `{}`", self.db_name),
            CREATE_USERS_TABLE.to_string(),
            CREATE_POSTS_TABLE.to_string(),
        ]
    }

    /// Run every statement. Stops at the first failure; nothing is undone.
    pub async fn initialize<T: SeedTarget + ?Sized>(&self, target: &mut T) -> Result<(), SeedError> {
        for statement in self.statements() {
            debug!("DDL: {}", statement);
            if let Err(source) = target.execute(&statement).await {
                return Err(SeedError::Schema { statement, source });
            }
        }

        info!("Database `{}` and tables ready", self.db_name);
        Ok(())
    }
}

/// Unquoted MySQL identifier rules, which also keep backtick quoting safe.
fn validate_identifier(name: &str) -> Result<(), SeedError> {
    if name.is_empty() || name.len() > MAX_IDENTIFIER_LEN {
        return Err(SeedError::Config(format!(
            "database name must be 1-{MAX_IDENTIFIER_LEN} characters, got {}",
            name.len()
        )));
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$'))
    {
        return Err(SeedError::Config(format!(
            "database name '{name}' contains invalid character '{bad}'"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_order() {
        let schema = SchemaInitializer::new("gl_db").unwrap();
        let statements = schema.statements();

        assert_eq!(statements.len(), 4);
        assert_eq!(statements[0], "CREATE DATABASE IF NOT EXISTS `gl_db`");
        assert_eq!(statements[1], "USE `gl_db`");
        assert!(statements[2].starts_with("CREATE TABLE IF NOT EXISTS `users`"));
        assert!(statements[3].starts_with("CREATE TABLE IF NOT EXISTS `posts`"));
    }

    #[test]
    fn test_table_ddl() {
        assert!(CREATE_USERS_TABLE.contains("`id` BIGINT AUTO_INCREMENT PRIMARY KEY"));
        assert!(CREATE_USERS_TABLE.contains("`email` VARCHAR(150)"));
        assert!(CREATE_POSTS_TABLE.contains("INDEX (`user_id`)"));
        assert!(CREATE_POSTS_TABLE.contains("`content` TEXT"));
        assert!(!CREATE_POSTS_TABLE.contains("FOREIGN KEY"));
    }

    #[test]
    fn test_rejects_bad_database_names() {
        assert!(SchemaInitializer::new("gl_db").is_ok());
        assert!(SchemaInitializer::new("db$1").is_ok());
        assert!(matches!(
            SchemaInitializer::new(""),
            Err(SeedError::Config(_))
        ));
        assert!(matches!(
            SchemaInitializer::new("x`; DROP DATABASE mysql; --"),
            Err(SeedError::Config(_))
        ));
        assert!(matches!(
            SchemaInitializer::new("a".repeat(65)),
            Err(SeedError::Config(_))
        ));
    }
}
