//! The single MySQL connection used for a seeding run.

use crate::error::SeedError;
use crate::insert::InsertBatch;
use crate::target::{BoxError, SeedTarget};
use mysql_async::prelude::*;
use mysql_async::{Conn, Opts, OptsBuilder, Params};
use std::fmt;
use tracing::{debug, info};

/// Where and as whom to connect. No default database is selected; the schema
/// initializer creates and selects it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl ConnectionConfig {
    /// Driver options. Autocommit is set explicitly on every new session.
    pub fn opts(&self) -> Opts {
        OptsBuilder::default()
            .ip_or_hostname(self.host.clone())
            .tcp_port(self.port)
            .user(Some(self.user.clone()))
            .pass(Some(self.password.clone()))
            .init(vec!["SET autocommit = 1"])
            .into()
    }
}

/// Renders as a URL with the password masked, safe for logs.
impl fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mysql://{}:***@{}:{}", self.user, self.host, self.port)
    }
}

/// An open MySQL session. Must be released with [`MySQLTarget::close`].
pub struct MySQLTarget {
    conn: Conn,
}

impl MySQLTarget {
    /// Open the connection.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self, SeedError> {
        info!("Connecting to {}", config);
        let conn = Conn::new(config.opts())
            .await
            .map_err(SeedError::Connection)?;
        debug!("Connected, connection id {}", conn.id());
        Ok(Self { conn })
    }

    /// Disconnect from the server.
    pub async fn close(self) -> Result<(), SeedError> {
        self.conn.disconnect().await.map_err(SeedError::Connection)?;
        info!("Connection closed");
        Ok(())
    }
}

#[async_trait::async_trait]
impl SeedTarget for MySQLTarget {
    async fn execute(&mut self, sql: &str) -> Result<(), BoxError> {
        self.conn.query_drop(sql).await?;
        Ok(())
    }

    async fn insert_batch(&mut self, batch: &InsertBatch) -> Result<u64, BoxError> {
        if batch.is_empty() {
            return Ok(0);
        }

        let sql = batch.sql();
        self.conn
            .exec_drop(&sql, Params::Positional(batch.params()))
            .await?;

        Ok(self.conn.affected_rows())
    }
}
