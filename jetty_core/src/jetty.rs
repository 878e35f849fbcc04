//! Connector configuration and credentials
//!
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use yaml_peg::serde as yaml;

use crate::logging::debug;

/// Config for a single connector in this project.
#[derive(Clone, Deserialize, Serialize, Default, Debug, PartialEq, Eq)]
pub struct ConnectorConfig {
    /// The connector type
    #[serde(rename = "type")]
    pub connector_type: String,
    /// Additional configuration, specific to the connector
    #[serde(flatten)]
    pub config: HashMap<String, String>,
}

impl ConnectorConfig {
    /// Basic constructor
    pub fn new(connector_type: String, config: HashMap<String, String>) -> Self {
        Self {
            connector_type,
            config,
        }
    }

    /// Look up a connector-specific setting.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(String::as_str)
    }
}

/// Alias for HashMap to hold credentials information.
pub type CredentialsMap = HashMap<String, String>;

/// Fetch the credentials from the Jetty connectors config.
///
/// The file maps a connector namespace to its credentials:
///
/// ```yaml
/// materialize:
///   host: abc123.us-east-1.aws.materialize.cloud
///   user: jetty@example.com
///   password: mzp_...
/// ```
pub fn fetch_credentials<P: AsRef<Path>>(path: P) -> Result<HashMap<String, CredentialsMap>> {
    debug!("Trying to read credentials from {:?}", path.as_ref());
    let credentials_raw = fs::read_to_string(&path)
        .with_context(|| format!("reading credentials from {:?}", path.as_ref()))?;
    parse_credentials(&credentials_raw)
}

fn parse_credentials(raw: &str) -> Result<HashMap<String, CredentialsMap>> {
    let mut config = yaml::from_str::<HashMap<String, CredentialsMap>>(raw)
        .context("Deserializing credentials")?;

    config
        .pop()
        .ok_or_else(|| anyhow!["failed to generate credentials"])
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use maplit::hashmap;

    use super::*;

    #[test]
    fn credentials_parse_by_namespace() -> Result<()> {
        let raw = r#"
materialize:
  host: abc.us-east-1.aws.materialize.cloud
  user: jetty
other:
  host: localhost
"#;
        let creds = parse_credentials(raw)?;
        assert_eq!(creds.len(), 2);
        assert_eq!(
            creds["materialize"],
            hashmap! {
                "host".to_owned() => "abc.us-east-1.aws.materialize.cloud".to_owned(),
                "user".to_owned() => "jetty".to_owned(),
            }
        );
        Ok(())
    }

    #[test]
    fn fetch_credentials_reads_file() -> Result<()> {
        let path = std::env::temp_dir().join("jetty_core_fetch_credentials_test.yaml");
        fs::write(&path, "materialize:\n  host: localhost\n")?;
        let creds = fetch_credentials(&path)?;
        fs::remove_file(&path)?;
        assert_eq!(creds["materialize"]["host"], "localhost");
        Ok(())
    }

    #[test]
    fn fetch_credentials_missing_file_fails() {
        let res = fetch_credentials("/definitely/not/a/real/connectors.yaml");
        assert!(res.is_err());
    }

    #[test]
    fn connector_config_reads_settings() {
        let config = ConnectorConfig::new(
            "materialize".to_owned(),
            hashmap! {"region".to_owned() => "aws/us-east-1".to_owned()},
        );
        assert_eq!(config.get("region"), Some("aws/us-east-1"));
        assert_eq!(config.get("missing"), None);
    }
}
