//! In-memory [`SeedTarget`] for tests.
//!
//! `MemoryTarget` understands just enough of the seeding DDL to track which
//! databases and tables exist, keeps every inserted row, and can be told to
//! fail a given statement or batch.

use crate::insert::InsertBatch;
use crate::target::{BoxError, SeedTarget};
use mysql_async::Value;
use std::collections::{BTreeMap, BTreeSet};

const CREATE_DATABASE: &str = "CREATE DATABASE IF NOT EXISTS ";
const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS ";

#[derive(Debug, Default)]
pub struct MemoryTarget {
    statements: Vec<String>,
    databases: BTreeSet<String>,
    tables: BTreeMap<String, Vec<Vec<Value>>>,
    insert_calls: BTreeMap<String, u64>,
    fail_insert: Option<(String, u64)>,
    fail_statement: Option<String>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `batch`-th insert (1-based) into `table`.
    pub fn fail_insert_at(mut self, table: &str, batch: u64) -> Self {
        self.fail_insert = Some((table.to_string(), batch));
        self
    }

    /// Fail any statement containing `fragment`.
    pub fn fail_statement_containing(mut self, fragment: &str) -> Self {
        self.fail_statement = Some(fragment.to_string());
        self
    }

    /// Every statement executed, in order.
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn has_database(&self, name: &str) -> bool {
        self.databases.contains(name)
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Stored rows of `table`, empty if the table does not exist.
    pub fn rows(&self, table: &str) -> &[Vec<Value>] {
        self.tables.get(table).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn row_count(&self, table: &str) -> usize {
        self.rows(table).len()
    }

    /// Number of insert attempts against `table`, failed ones included.
    pub fn insert_calls(&self, table: &str) -> u64 {
        self.insert_calls.get(table).copied().unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl SeedTarget for MemoryTarget {
    async fn execute(&mut self, sql: &str) -> Result<(), BoxError> {
        self.statements.push(sql.to_string());

        if let Some(fragment) = &self.fail_statement {
            if sql.contains(fragment.as_str()) {
                return Err(format!("simulated failure executing: {sql}").into());
            }
        }

        let sql = sql.trim_start();
        if let Some(name) = created_name(sql, CREATE_DATABASE) {
            self.databases.insert(name);
        } else if let Some(name) = created_name(sql, CREATE_TABLE) {
            self.tables.entry(name).or_default();
        }

        Ok(())
    }

    async fn insert_batch(&mut self, batch: &InsertBatch) -> Result<u64, BoxError> {
        let table = batch.table();
        let calls = self.insert_calls.entry(table.to_string()).or_insert(0);
        *calls += 1;
        let attempt = *calls;

        if let Some((fail_table, fail_batch)) = &self.fail_insert {
            if fail_table == table && *fail_batch == attempt {
                return Err(format!("simulated failure on {table} batch {attempt}").into());
            }
        }

        let rows = self
            .tables
            .get_mut(table)
            .ok_or_else(|| format!("Table '{table}' doesn't exist"))?;
        rows.extend(batch.rows().iter().cloned());

        Ok(batch.len() as u64)
    }
}

/// Name following `prefix`, with backticks stripped.
fn created_name(sql: &str, prefix: &str) -> Option<String> {
    let rest = sql.strip_prefix(prefix)?;
    let name = rest
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()?
        .trim_matches('`');
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_generator::UserRecord;

    #[test]
    fn test_created_name() {
        assert_eq!(
            created_name("CREATE TABLE IF NOT EXISTS `users` (", CREATE_TABLE),
            Some("users".to_string())
        );
        assert_eq!(
            created_name("CREATE DATABASE IF NOT EXISTS `gl_db`", CREATE_DATABASE),
            Some("gl_db".to_string())
        );
        assert_eq!(created_name("USE `gl_db`", CREATE_TABLE), None);
    }

    #[tokio::test]
    async fn test_insert_into_missing_table_fails() {
        let mut target = MemoryTarget::new();
        let batch = InsertBatch::from_records(vec![UserRecord {
            name: "n".to_string(),
            email: "e@example.com".to_string(),
        }]);

        assert!(target.insert_batch(&batch).await.is_err());
        assert_eq!(target.insert_calls("users"), 1);
    }
}
