//! Region tags on identifiers that cross the reconciler boundary.
//!
//! Inside the crate a region-qualified id is a [`RegionId`]. Plain strings
//! are only interpreted at the edges, by [`prefix`] and [`strip`], where an
//! id containing `:` is taken to be qualified already.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::consts::REGION_DELIMITER;

/// A region tag such as `aws/us-east-1`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the region from a cloud host name of the form
    /// `<id>.<region>.<cloud>.materialize.cloud`, giving `<cloud>/<region>`.
    pub fn from_host(host: &str) -> Option<Self> {
        let parts: Vec<_> = host.trim_end_matches('.').split('.').collect();
        match parts.as_slice() {
            [.., region, cloud, "materialize", "cloud"] if parts.len() >= 5 => {
                Some(Region(format!("{cloud}/{region}")))
            }
            _ => None,
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An identifier that may or may not carry a region tag.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegionId {
    Bare { id: String },
    Qualified { region: Region, id: String },
}

impl RegionId {
    pub fn bare(id: impl Into<String>) -> Self {
        RegionId::Bare { id: id.into() }
    }

    pub fn qualified(region: Region, id: impl Into<String>) -> Self {
        RegionId::Qualified {
            region,
            id: id.into(),
        }
    }

    /// Attach `region` to a bare id. A qualified id keeps the region it has.
    pub fn qualify(self, region: &Region) -> Self {
        match self {
            RegionId::Bare { id } => RegionId::Qualified {
                region: region.to_owned(),
                id,
            },
            qualified => qualified,
        }
    }

    /// The id without any region.
    pub fn id(&self) -> &str {
        match self {
            RegionId::Bare { id } | RegionId::Qualified { id, .. } => id,
        }
    }

    pub fn region(&self) -> Option<&Region> {
        match self {
            RegionId::Bare { .. } => None,
            RegionId::Qualified { region, .. } => Some(region),
        }
    }

    pub fn into_id(self) -> String {
        match self {
            RegionId::Bare { id } | RegionId::Qualified { id, .. } => id,
        }
    }
}

impl Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionId::Bare { id } => write!(f, "{id}"),
            RegionId::Qualified { region, id } => write!(f, "{region}{REGION_DELIMITER}{id}"),
        }
    }
}

impl FromStr for RegionId {
    type Err = Infallible;

    /// Anything before the first `:` is the region.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.split_once(REGION_DELIMITER) {
            Some((region, id)) => RegionId::qualified(Region::new(region), id),
            None => RegionId::bare(s),
        })
    }
}

pub(crate) fn parse_region_id(raw: &str) -> RegionId {
    match raw.parse() {
        Ok(id) => id,
        Err(never) => match never {},
    }
}

/// Qualify a raw id with `region`, unless it already carries one.
pub fn prefix(region: &Region, id: &str) -> String {
    parse_region_id(id).qualify(region).to_string()
}

/// Drop the region from a raw id, if it has one.
pub fn strip(id: &str) -> String {
    parse_region_id(id).into_id()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us_east() -> Region {
        Region::new("aws/us-east-1")
    }

    #[test]
    fn prefix_qualifies_bare_ids() {
        assert_eq!(prefix(&us_east(), "u1"), "aws/us-east-1:u1");
    }

    #[test]
    fn prefix_is_idempotent() {
        let region = us_east();
        for id in ["u1", "aws/us-east-1:u1", "GRANT|TABLE|u1|u2|SELECT", ""] {
            let once = prefix(&region, id);
            assert_eq!(prefix(&region, &once), once);
        }
        assert_eq!(prefix(&region, "aws/us-east-1:u1"), "aws/us-east-1:u1");
    }

    #[test]
    fn prefix_leaves_other_regions_alone() {
        assert_eq!(prefix(&us_east(), "aws/eu-west-1:u1"), "aws/eu-west-1:u1");
    }

    #[test]
    fn strip_drops_the_region() {
        assert_eq!(strip("aws/us-east-1:u1"), "u1");
        assert_eq!(strip("u1"), "u1");
        // Only the first delimiter counts.
        assert_eq!(strip("aws/us-east-1:a:b"), "a:b");
    }

    #[test]
    fn tagged_ids_qualify_once() {
        let id = RegionId::bare("u1").qualify(&us_east());
        assert_eq!(id.region(), Some(&us_east()));
        let again = id.clone().qualify(&Region::new("gcp/us-central1"));
        assert_eq!(again, id);
        assert_eq!(again.id(), "u1");
    }

    #[test]
    fn region_from_cloud_host() {
        assert_eq!(
            Region::from_host("abc123.us-east-1.aws.materialize.cloud"),
            Some(us_east())
        );
        assert_eq!(
            Region::from_host("abc123.eu-west-1.aws.materialize.cloud."),
            Some(Region::new("aws/eu-west-1"))
        );
        assert_eq!(Region::from_host("localhost"), None);
        assert_eq!(Region::from_host("aws.materialize.cloud"), None);
    }
}
