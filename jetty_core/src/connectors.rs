//! Traits connectors implement, and the seams they talk to the outside
//! world through.

use anyhow::Result;
use async_trait::async_trait;

use crate::jetty::{ConnectorConfig, CredentialsMap};

/// Something that can run a single SQL statement against a data platform.
///
/// Connection management, retries and timeouts all live behind this trait.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Execute one statement, discarding any rows it returns.
    async fn exec(&self, statement: &str) -> Result<()>;
}

/// The trait all connectors are expected to implement.
#[async_trait]
pub trait Connector {
    /// Instantiate a Connector from configuration.
    fn new(
        config: &ConnectorConfig,
        credentials: &CredentialsMap,
        executor: Box<dyn SqlExecutor>,
    ) -> Result<Box<Self>>;
    /// Check if the Connector is properly set up and return the connection
    /// status (true for connected, false for not).
    async fn check(&self) -> bool;
}
