use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::CatalogLookup,
    consts::{PUBLIC, PUBLIC_ROLE_ID},
    error::Result,
};

use super::object_name::quote_ident;

/// A role in a grant: either a concrete role or the PUBLIC pseudo-role.
///
/// Whether `Role` holds an id or a name depends on where it came from.
/// Records and keys carry ids; statements carry names. PUBLIC is the same in
/// both worlds and is never looked up.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoleRef {
    Public,
    Role(String),
}

impl RoleRef {
    /// A role declared by name. `PUBLIC` (in any case) is the pseudo-role.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.eq_ignore_ascii_case(PUBLIC) {
            RoleRef::Public
        } else {
            RoleRef::Role(name)
        }
    }

    /// A role as it appears in the catalog, where PUBLIC is `p`.
    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        if id == PUBLIC_ROLE_ID {
            RoleRef::Public
        } else {
            RoleRef::Role(id)
        }
    }

    /// The catalog form of this role: `p` for PUBLIC.
    pub fn as_id(&self) -> &str {
        match self {
            RoleRef::Public => PUBLIC_ROLE_ID,
            RoleRef::Role(r) => r,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, RoleRef::Public)
    }

    /// Turn a name-based reference into an id-based one.
    pub fn to_id(&self, catalog: &dyn CatalogLookup) -> Result<RoleRef> {
        match self {
            RoleRef::Public => Ok(RoleRef::Public),
            RoleRef::Role(name) => catalog.resolve_role_id(name).map(RoleRef::Role),
        }
    }

    /// Turn an id-based reference into a name-based one.
    pub fn to_name(&self, catalog: &dyn CatalogLookup) -> Result<RoleRef> {
        match self {
            RoleRef::Public => Ok(RoleRef::Public),
            RoleRef::Role(id) => catalog.role_name(id).map(RoleRef::Role),
        }
    }
}

/// Renders the role for a SQL statement: the bare PUBLIC keyword, or a
/// quoted identifier.
impl Display for RoleRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleRef::Public => write!(f, "{PUBLIC}"),
            RoleRef::Role(r) => write!(f, "{}", quote_ident(r)),
        }
    }
}
