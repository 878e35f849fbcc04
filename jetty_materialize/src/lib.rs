//! Materialize Connector
//!
//! Everything needed to read privilege state out of Materialize's catalog,
//! diff it against configured state, and write the difference back as SQL.
//!
//! ```no_run
//! use std::collections::BTreeSet;
//!
//! use jetty_core::{jetty::ConnectorConfig, Connector, SqlExecutor};
//! use jetty_materialize::{catalog::StaticCatalog, MaterializeConnector};
//!
//! # async fn run(executor: Box<dyn SqlExecutor>) -> anyhow::Result<()> {
//! let config = ConnectorConfig::default();
//! let credentials = jetty_core::fetch_credentials("connectors.yaml")?;
//! let mz = MaterializeConnector::new(&config, &credentials["materialize"], executor)?;
//! let plan = mz.plan(&BTreeSet::new(), &BTreeSet::new(), &StaticCatalog::new())?;
//! mz.apply(&plan).await?;
//! # Ok(())
//! # }
//! ```

pub mod acl;
pub mod catalog;
pub mod compat;
pub mod consts;
mod creds;
pub mod diff;
mod entry_types;
pub mod error;
pub mod key;
pub mod privilege;
pub mod region;
pub mod write;

pub use entry_types::*;

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use async_trait::async_trait;
use jetty_core::{
    connectors::{Connector, SqlExecutor},
    jetty::{ConnectorConfig, CredentialsMap},
    log_runtime,
    logging::{debug, error, info},
};

use catalog::CatalogLookup;
use diff::GrantDiff;
use key::GrantKey;
use region::Region;
use write::PrioritizedQueries;

/// The main Materialize Connector struct.
///
/// Holds the region it was configured for and the executor statements are
/// sent through.
pub struct MaterializeConnector {
    credentials: creds::MaterializeCredentials,
    region: Region,
    executor: Box<dyn SqlExecutor>,
}

#[async_trait]
impl Connector for MaterializeConnector {
    /// Validates the credentials and fixes the region for this connector.
    fn new(
        _config: &ConnectorConfig,
        credentials: &CredentialsMap,
        executor: Box<dyn SqlExecutor>,
    ) -> Result<Box<Self>> {
        let credentials = creds::MaterializeCredentials::from_map(credentials)?;
        credentials.validate()?;
        let region = credentials.region()?;
        debug!(
            "configured Materialize connector for {} in {region}",
            credentials.host
        );

        Ok(Box::new(MaterializeConnector {
            credentials,
            region,
            executor,
        }))
    }

    async fn check(&self) -> bool {
        match self.executor.exec("SELECT 1").await {
            Err(e) => {
                error!("couldn't reach Materialize at {}: {:?}", self.credentials.host, e);
                false
            }
            Ok(_) => true,
        }
    }
}

impl MaterializeConnector {
    /// The region this connector's keys are qualified with.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The region-qualified key for a system grant.
    pub fn system_grant_key(&self, grant: &SystemGrant) -> String {
        grant.qualified_key(&self.region)
    }

    /// Work out the statements that turn `actual` into `desired`.
    pub fn plan(
        &self,
        desired: &BTreeSet<GrantKey>,
        actual: &BTreeSet<GrantKey>,
        catalog: &dyn CatalogLookup,
    ) -> Result<PrioritizedQueries> {
        let diff = GrantDiff::new(desired, actual);
        if diff.is_empty() {
            info!("Materialize privileges are up to date");
            return Ok(PrioritizedQueries::default());
        }
        debug!("planned changes:\n{diff}");
        write::prepare_queries(&diff, catalog).context("preparing Materialize statements")
    }

    /// Run every statement in the plan, in order. Stops at the first
    /// statement that fails. Returns how many statements ran.
    pub async fn apply(&self, queries: &PrioritizedQueries) -> Result<usize> {
        let statements = queries.flatten();
        let total = statements.len();

        log_runtime!("applying Materialize statements", {
            for (i, statement) in statements.iter().enumerate() {
                debug!("executing {statement}");
                if let Err(e) = self.executor.exec(statement).await {
                    error!("statement {} of {total} failed: {statement}", i + 1);
                    return Err(e).with_context(|| {
                        format!("failed to execute statement {} of {total}: {statement}", i + 1)
                    });
                }
            }
        });

        info!("applied {total} statements to Materialize ({})", self.region);
        Ok(total)
    }
}
