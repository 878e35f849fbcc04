use std::collections::HashSet;

use anyhow::{anyhow, Result};
use jetty_core::jetty::CredentialsMap;
use serde::Deserialize;

use crate::region::Region;

/// Credentials for connecting to Materialize.
///
/// The user pastes these into their connectors.yaml file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct MaterializeCredentials {
    pub(crate) host: String,
    pub(crate) user: String,
    pub(crate) password: String,
    pub(crate) port: Option<u16>,
    /// Overrides the region derived from the host.
    pub(crate) region: Option<String>,
}

impl MaterializeCredentials {
    /// Read the credentials out of a connector's credential map. Every
    /// missing required field is reported at once.
    pub(crate) fn from_map(credentials: &CredentialsMap) -> Result<Self> {
        let mut creds = MaterializeCredentials::default();
        let mut required_fields: HashSet<_> = vec!["host", "user", "password"].into_iter().collect();

        for (k, v) in credentials.iter() {
            match k.as_ref() {
                "host" => creds.host = v.to_string(),
                "user" => creds.user = v.to_string(),
                "password" => creds.password = v.to_string(),
                "port" => {
                    creds.port = Some(
                        v.parse()
                            .map_err(|_| anyhow!("invalid Materialize port: {v:?}"))?,
                    )
                }
                "region" => creds.region = Some(v.to_string()),
                _ => (),
            }

            required_fields.remove::<str>(k);
        }

        if !required_fields.is_empty() {
            let mut missing: Vec<_> = required_fields.into_iter().collect();
            missing.sort_unstable();
            return Err(anyhow![
                "Materialize config missing required fields: {:#?}",
                missing
            ]);
        }
        Ok(creds)
    }

    /// Perform simple field validation to catch bad input.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.host.is_empty() || self.user.is_empty() || self.password.is_empty() {
            return Err(anyhow!(
                "Credentials are missing. Please make sure your connectors.yaml file is correct. Host: {:?}, user: {:?}",
                self.host,
                self.user
            ));
        }
        Ok(())
    }

    /// The explicit `region` credential, or the region encoded in the host
    /// name.
    pub(crate) fn region(&self) -> Result<Region> {
        match &self.region {
            Some(region) if !region.is_empty() => Ok(Region::new(region.as_str())),
            _ => Region::from_host(&self.host).ok_or_else(|| {
                anyhow!(
                    "couldn't determine the Materialize region from host {:?}; set `region` in the connector credentials",
                    self.host
                )
            }),
        }
    }
}
