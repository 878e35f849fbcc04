use serde::{Deserialize, Serialize};

use crate::{
    acl::parse_acl_with,
    catalog::CatalogLookup,
    error::Result,
    key::GrantKey,
    privilege::{Privilege, PrivilegeCatalog},
    ObjectName, ObjectType, RoleRef,
};

use super::dedup_privileges;

/// A direct grant of privileges on one object to one role.
///
/// All ids are catalog ids; PUBLIC is `p`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grant {
    pub object_type: ObjectType,
    pub object_id: String,
    pub grantee_id: String,
    pub privileges: Vec<Privilege>,
}

impl Grant {
    /// Build a grant, rejecting privileges that aren't valid on the object
    /// type. Repeated privileges are collapsed.
    pub fn new(
        object_type: ObjectType,
        object_id: impl Into<String>,
        grantee_id: impl Into<String>,
        privileges: impl IntoIterator<Item = Privilege>,
    ) -> Result<Self> {
        Self::new_with(
            PrivilegeCatalog::global(),
            object_type,
            object_id,
            grantee_id,
            privileges,
        )
    }

    /// [`Grant::new`] against a specific catalog.
    pub fn new_with(
        catalog: &PrivilegeCatalog,
        object_type: ObjectType,
        object_id: impl Into<String>,
        grantee_id: impl Into<String>,
        privileges: impl IntoIterator<Item = Privilege>,
    ) -> Result<Self> {
        let privileges = dedup_privileges(privileges);
        catalog.validate(object_type, &privileges)?;
        Ok(Self {
            object_type,
            object_id: object_id.into(),
            grantee_id: grantee_id.into(),
            privileges,
        })
    }

    /// Build a grant from declared names, resolving the object and the role
    /// to catalog ids.
    pub fn from_names(
        lookup: &dyn CatalogLookup,
        object_type: ObjectType,
        object: &ObjectName,
        role: &RoleRef,
        privileges: impl IntoIterator<Item = Privilege>,
    ) -> Result<Self> {
        let object_id = lookup.resolve_object_id(object_type, object)?;
        let grantee = role.to_id(lookup)?;
        Self::new(object_type, object_id, grantee.as_id(), privileges)
    }

    /// Build one grant per grantee from an object's ACL column. Grantees are
    /// returned in the order they first appear.
    pub fn from_acl(object_type: ObjectType, object_id: &str, acl: &str) -> Result<Vec<Self>> {
        let catalog = PrivilegeCatalog::global();
        let mut by_grantee: Vec<(String, Vec<Privilege>)> = vec![];
        for entry in parse_acl_with(catalog, acl)? {
            match by_grantee.iter_mut().find(|(g, _)| *g == entry.grantee) {
                Some((_, privileges)) => privileges.extend(entry.privileges),
                None => by_grantee.push((entry.grantee, entry.privileges)),
            }
        }
        by_grantee
            .into_iter()
            .map(|(grantee, privileges)| {
                Self::new_with(catalog, object_type, object_id, grantee, privileges)
            })
            .collect()
    }

    /// One key per privilege.
    pub fn keys(&self) -> Vec<GrantKey> {
        self.privileges
            .iter()
            .map(|privilege| GrantKey::Object {
                object_type: self.object_type,
                object_id: self.object_id.to_owned(),
                role_id: self.grantee_id.to_owned(),
                privilege: *privilege,
            })
            .collect()
    }
}
