use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The kinds of catalog object privileges can be granted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    #[serde(rename = "DATABASE")]
    Database,
    #[serde(rename = "SCHEMA")]
    Schema,
    #[serde(rename = "TABLE")]
    Table,
    #[serde(rename = "VIEW")]
    View,
    #[serde(rename = "MATERIALIZED VIEW")]
    MaterializedView,
    #[serde(rename = "INDEX")]
    Index,
    #[serde(rename = "TYPE")]
    Type,
    #[serde(rename = "SOURCE")]
    Source,
    #[serde(rename = "SINK")]
    Sink,
    #[serde(rename = "CONNECTION")]
    Connection,
    #[serde(rename = "SECRET")]
    Secret,
    #[serde(rename = "CLUSTER")]
    Cluster,
    /// Account-wide privileges (CREATEROLE and friends).
    #[serde(rename = "SYSTEM")]
    System,
}

impl ObjectType {
    /// Every object type, in catalog order.
    pub const ALL: [ObjectType; 13] = [
        ObjectType::Database,
        ObjectType::Schema,
        ObjectType::Table,
        ObjectType::View,
        ObjectType::MaterializedView,
        ObjectType::Index,
        ObjectType::Type,
        ObjectType::Source,
        ObjectType::Sink,
        ObjectType::Connection,
        ObjectType::Secret,
        ObjectType::Cluster,
        ObjectType::System,
    ];

    /// The SQL spelling of the type.
    pub fn name(&self) -> &'static str {
        match self {
            ObjectType::Database => "DATABASE",
            ObjectType::Schema => "SCHEMA",
            ObjectType::Table => "TABLE",
            ObjectType::View => "VIEW",
            ObjectType::MaterializedView => "MATERIALIZED VIEW",
            ObjectType::Index => "INDEX",
            ObjectType::Type => "TYPE",
            ObjectType::Source => "SOURCE",
            ObjectType::Sink => "SINK",
            ObjectType::Connection => "CONNECTION",
            ObjectType::Secret => "SECRET",
            ObjectType::Cluster => "CLUSTER",
            ObjectType::System => "SYSTEM",
        }
    }
}

impl Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ObjectType {
    type Err = Error;

    /// Case-insensitive, and tolerant of extra whitespace between the words
    /// of MATERIALIZED VIEW.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();
        ObjectType::ALL
            .into_iter()
            .find(|t| t.name() == normalized)
            .ok_or_else(|| Error::UnknownObjectType(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[test]
    fn names_round_trip_through_from_str() -> Result<()> {
        for t in ObjectType::ALL {
            assert_eq!(t.name().parse::<ObjectType>()?, t);
        }
        Ok(())
    }

    #[test]
    fn from_str_is_case_insensitive() -> Result<()> {
        assert_eq!("materialized   view".parse::<ObjectType>()?, ObjectType::MaterializedView);
        assert_eq!("Table".parse::<ObjectType>()?, ObjectType::Table);
        Ok(())
    }

    #[test]
    fn unknown_type_is_an_error() {
        assert_eq!(
            "WAREHOUSE".parse::<ObjectType>(),
            Err(Error::UnknownObjectType("WAREHOUSE".to_owned()))
        );
    }
}
