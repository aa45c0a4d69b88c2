//! Batched INSERT logic for MySQL population.

use mysql_async::Value;
use seed_generator::{PostRecord, UserRecord};

/// MySQL rejects prepared statements with more placeholders than this.
pub const MAX_PLACEHOLDERS: u64 = 65_535;

/// A generated record that maps onto one row of a MySQL table.
pub trait MySQLRow {
    /// Target table.
    const TABLE: &'static str;
    /// Inserted columns, in parameter order.
    const COLUMNS: &'static [&'static str];

    /// Convert into positional parameters matching `COLUMNS`.
    fn into_values(self) -> Vec<Value>;

    /// Largest batch that still fits under [`MAX_PLACEHOLDERS`].
    fn max_batch_size() -> u64 {
        MAX_PLACEHOLDERS / Self::COLUMNS.len() as u64
    }
}

impl MySQLRow for UserRecord {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["name", "email"];

    fn into_values(self) -> Vec<Value> {
        vec![
            Value::Bytes(self.name.into_bytes()),
            Value::Bytes(self.email.into_bytes()),
        ]
    }
}

impl MySQLRow for PostRecord {
    const TABLE: &'static str = "posts";
    const COLUMNS: &'static [&'static str] = &["user_id", "title", "content"];

    fn into_values(self) -> Vec<Value> {
        vec![
            Value::UInt(self.user_id),
            Value::Bytes(self.title.into_bytes()),
            Value::Bytes(self.content.into_bytes()),
        ]
    }
}

/// One batch of rows for a single table, ready to submit as one statement.
#[derive(Debug, Clone)]
pub struct InsertBatch {
    table: &'static str,
    columns: &'static [&'static str],
    rows: Vec<Vec<Value>>,
}

impl InsertBatch {
    /// Build a batch from generated records.
    pub fn from_records<R: MySQLRow>(records: Vec<R>) -> Self {
        Self {
            table: R::TABLE,
            columns: R::COLUMNS,
            rows: records.into_iter().map(MySQLRow::into_values).collect(),
        }
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The multi-row INSERT statement for this batch.
    pub fn sql(&self) -> String {
        build_insert_sql(self.table, self.columns, self.rows.len())
    }

    /// All row values flattened in statement order.
    pub fn params(&self) -> Vec<Value> {
        self.rows.iter().flatten().cloned().collect()
    }
}

/// Build `INSERT INTO `t` (`a`, `b`) VALUES (?, ?), (?, ?), ...` for `row_count` rows.
pub fn build_insert_sql(table: &str, columns: &[&str], row_count: usize) -> String {
    let col_placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
    let row_template = format!("({})", col_placeholders.join(", "));
    let rows_template: Vec<&str> = (0..row_count).map(|_| row_template.as_str()).collect();

    format!(
        "INSERT INTO `{}` ({}) VALUES {}",
        table,
        columns
            .iter()
            .map(|c| format!("`{c}`"))
            .collect::<Vec<_>>()
            .join(", "),
        rows_template.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_insert_sql() {
        let sql = build_insert_sql("users", &["name", "email"], 3);
        assert_eq!(
            sql,
            "INSERT INTO `users` (`name`, `email`) VALUES (?, ?), (?, ?), (?, ?)"
        );
    }

    #[test]
    fn test_user_batch() {
        let batch = InsertBatch::from_records(vec![
            UserRecord {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            },
            UserRecord {
                name: "Alan Turing".to_string(),
                email: "alan@example.org".to_string(),
            },
        ]);

        assert_eq!(batch.table(), "users");
        assert_eq!(batch.len(), 2);
        assert_eq!(
            batch.sql(),
            "INSERT INTO `users` (`name`, `email`) VALUES (?, ?), (?, ?)"
        );

        let params = batch.params();
        assert_eq!(params.len(), 4);
        assert_eq!(params[0], Value::Bytes(b"Ada Lovelace".to_vec()));
        assert_eq!(params[3], Value::Bytes(b"alan@example.org".to_vec()));
    }

    #[test]
    fn test_post_batch() {
        let batch = InsertBatch::from_records(vec![PostRecord {
            user_id: 17,
            title: "Lorem ipsum dolor sit.".to_string(),
            content: "Body".to_string(),
        }]);

        assert_eq!(batch.table(), "posts");
        assert_eq!(batch.columns(), &["user_id", "title", "content"]);
        assert_eq!(
            batch.sql(),
            "INSERT INTO `posts` (`user_id`, `title`, `content`) VALUES (?, ?, ?)"
        );
        assert_eq!(batch.params()[0], Value::UInt(17));
    }

    #[test]
    fn test_max_batch_size() {
        assert_eq!(UserRecord::max_batch_size(), 32_767);
        assert_eq!(PostRecord::max_batch_size(), 21_845);
    }

    #[test]
    fn test_empty_batch() {
        let batch = InsertBatch::from_records(Vec::<UserRecord>::new());
        assert!(batch.is_empty());
        assert!(batch.params().is_empty());
    }
}
