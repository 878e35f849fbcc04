//! Privilege codes, their canonical names, and which object types they can
//! be granted on.
//!
//! The tables are built once, on first use, and never change afterwards.
//! Consumers take a `&PrivilegeCatalog`; [`PrivilegeCatalog::global`] hands out
//! the process-wide instance.

use std::{
    collections::{BTreeSet, HashMap},
    fmt::Display,
    str::FromStr,
};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    ObjectType,
};

/// A single grantable privilege.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Privilege {
    #[serde(rename = "SELECT")]
    Select,
    #[serde(rename = "INSERT")]
    Insert,
    #[serde(rename = "UPDATE")]
    Update,
    #[serde(rename = "DELETE")]
    Delete,
    #[serde(rename = "CREATE")]
    Create,
    #[serde(rename = "USAGE")]
    Usage,
    #[serde(rename = "CREATEROLE")]
    CreateRole,
    #[serde(rename = "CREATEDB")]
    CreateDb,
    #[serde(rename = "CREATECLUSTER")]
    CreateCluster,
}

impl Privilege {
    /// Every privilege.
    pub const ALL: [Privilege; 9] = [
        Privilege::Select,
        Privilege::Insert,
        Privilege::Update,
        Privilege::Delete,
        Privilege::Create,
        Privilege::Usage,
        Privilege::CreateRole,
        Privilege::CreateDb,
        Privilege::CreateCluster,
    ];

    /// The letter used for this privilege in ACL strings.
    pub fn code(&self) -> char {
        match self {
            Privilege::Select => 'r',
            Privilege::Insert => 'a',
            Privilege::Update => 'w',
            Privilege::Delete => 'd',
            Privilege::Create => 'C',
            Privilege::Usage => 'U',
            Privilege::CreateRole => 'R',
            Privilege::CreateDb => 'B',
            Privilege::CreateCluster => 'N',
        }
    }

    /// Canonical SQL name.
    pub fn name(&self) -> &'static str {
        match self {
            Privilege::Select => "SELECT",
            Privilege::Insert => "INSERT",
            Privilege::Update => "UPDATE",
            Privilege::Delete => "DELETE",
            Privilege::Create => "CREATE",
            Privilege::Usage => "USAGE",
            Privilege::CreateRole => "CREATEROLE",
            Privilege::CreateDb => "CREATEDB",
            Privilege::CreateCluster => "CREATECLUSTER",
        }
    }

    /// Whether this is one of the account-wide SYSTEM privileges.
    pub fn is_system(&self) -> bool {
        matches!(
            self,
            Privilege::CreateRole | Privilege::CreateDb | Privilege::CreateCluster
        )
    }
}

impl Display for Privilege {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Privilege {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Privilege::ALL
            .into_iter()
            .find(|p| p.name() == upper)
            .ok_or_else(|| Error::UnknownPrivilege(s.to_owned()))
    }
}

/// The privileges that may appear on a grant against each object type.
fn object_permissions(object_type: ObjectType) -> &'static [Privilege] {
    use Privilege::*;
    match object_type {
        ObjectType::Table => &[Insert, Select, Update, Delete],
        ObjectType::View | ObjectType::MaterializedView | ObjectType::Source => &[Select],
        ObjectType::Sink | ObjectType::Index => &[],
        ObjectType::Type | ObjectType::Secret | ObjectType::Connection => &[Usage],
        ObjectType::Database | ObjectType::Schema | ObjectType::Cluster => &[Usage, Create],
        ObjectType::System => &[CreateRole, CreateDb, CreateCluster],
    }
}

lazy_static! {
    static ref CATALOG: PrivilegeCatalog = PrivilegeCatalog::new();
}

/// Lookup tables between privilege codes, names and object types.
#[derive(Debug)]
pub struct PrivilegeCatalog {
    by_code: HashMap<char, Privilege>,
    by_object_type: HashMap<ObjectType, BTreeSet<Privilege>>,
}

impl PrivilegeCatalog {
    fn new() -> Self {
        Self {
            by_code: Privilege::ALL.into_iter().map(|p| (p.code(), p)).collect(),
            by_object_type: ObjectType::ALL
                .into_iter()
                .map(|t| (t, object_permissions(t).iter().copied().collect()))
                .collect(),
        }
    }

    /// The shared, read-only catalog.
    pub fn global() -> &'static PrivilegeCatalog {
        &CATALOG
    }

    /// The privilege an ACL letter stands for, if any.
    pub fn privilege_for_code(&self, code: char) -> Option<Privilege> {
        self.by_code.get(&code).copied()
    }

    /// The canonical name for an ACL letter, if any.
    pub fn name_for_code(&self, code: char) -> Option<&'static str> {
        self.privilege_for_code(code).map(|p| p.name())
    }

    /// The privileges that can be granted on `object_type`.
    pub fn object_permissions(&self, object_type: ObjectType) -> &BTreeSet<Privilege> {
        // Every ObjectType is inserted in new().
        &self.by_object_type[&object_type]
    }

    /// Whether `privilege` can be granted on `object_type`.
    pub fn is_allowed(&self, object_type: ObjectType, privilege: Privilege) -> bool {
        self.object_permissions(object_type).contains(&privilege)
    }

    /// Reject the first privilege that isn't legal on `object_type`.
    pub fn validate(&self, object_type: ObjectType, privileges: &[Privilege]) -> Result<()> {
        match privileges.iter().find(|p| !self.is_allowed(object_type, **p)) {
            Some(p) => Err(Error::InvalidPrivilege {
                privilege: p.name().to_owned(),
                object_type,
            }),
            None => Ok(()),
        }
    }

    /// Map a run of privilege letters to privileges, keeping order and
    /// duplicates. `entry` is only used for error reporting.
    pub fn parse_codes(&self, letters: &str, entry: &str) -> Result<Vec<Privilege>> {
        letters
            .chars()
            .map(|code| {
                self.privilege_for_code(code)
                    .ok_or_else(|| Error::UnknownPrivilegeCode {
                        code,
                        entry: entry.to_owned(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use maplit::btreeset;

    use super::*;

    #[test]
    fn codes_map_to_canonical_names() {
        let catalog = PrivilegeCatalog::global();
        let pairs = [
            ('r', "SELECT"),
            ('a', "INSERT"),
            ('w', "UPDATE"),
            ('d', "DELETE"),
            ('C', "CREATE"),
            ('U', "USAGE"),
            ('R', "CREATEROLE"),
            ('B', "CREATEDB"),
            ('N', "CREATECLUSTER"),
        ];
        for (code, name) in pairs {
            assert_eq!(catalog.name_for_code(code), Some(name));
        }
        assert_eq!(catalog.name_for_code('x'), None);
    }

    #[test]
    fn every_object_type_has_an_entry() {
        let catalog = PrivilegeCatalog::global();
        for t in ObjectType::ALL {
            // Indexing would panic on a missing entry.
            let _ = catalog.object_permissions(t);
        }
        assert_eq!(
            catalog.object_permissions(ObjectType::Table),
            &btreeset! {Privilege::Select, Privilege::Insert, Privilege::Update, Privilege::Delete}
        );
        assert!(catalog.object_permissions(ObjectType::Sink).is_empty());
    }

    #[test]
    fn validate_rejects_privileges_outside_the_type() {
        let catalog = PrivilegeCatalog::global();
        assert!(catalog
            .validate(ObjectType::Cluster, &[Privilege::Usage, Privilege::Create])
            .is_ok());
        assert_eq!(
            catalog.validate(ObjectType::View, &[Privilege::Select, Privilege::Insert]),
            Err(Error::InvalidPrivilege {
                privilege: "INSERT".to_owned(),
                object_type: ObjectType::View
            })
        );
    }

    #[test]
    fn every_subset_of_allowed_privileges_validates() {
        let catalog = PrivilegeCatalog::global();
        for t in ObjectType::ALL {
            let allowed: Vec<_> = catalog.object_permissions(t).iter().copied().collect();
            for mask in 0..(1u32 << allowed.len()) {
                let subset: Vec<_> = allowed
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, p)| *p)
                    .collect();
                assert!(catalog.validate(t, &subset).is_ok(), "{t}: {subset:?}");
            }
        }
    }

    #[test]
    fn parse_codes_keeps_order_and_duplicates() -> Result<()> {
        let privileges = PrivilegeCatalog::global().parse_codes("arra", "entry")?;
        assert_eq!(
            privileges,
            vec![
                Privilege::Insert,
                Privilege::Select,
                Privilege::Select,
                Privilege::Insert
            ]
        );
        Ok(())
    }

    #[test]
    fn parse_codes_fails_on_unknown_letters() {
        assert_eq!(
            PrivilegeCatalog::global().parse_codes("rz", "u1=rz/s1"),
            Err(Error::UnknownPrivilegeCode {
                code: 'z',
                entry: "u1=rz/s1".to_owned()
            })
        );
    }

    #[test]
    fn privilege_names_parse() -> Result<()> {
        assert_eq!("createcluster".parse::<Privilege>()?, Privilege::CreateCluster);
        assert!("ALL".parse::<Privilege>().is_err());
        Ok(())
    }
}
