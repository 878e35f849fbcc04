//! Looking up names and ids in the engine's catalog.
//!
//! Keys are built from catalog ids, while statements need names. The
//! [`CatalogLookup`] trait is the seam between the two; in production it is
//! backed by a snapshot of the catalog tables.

use std::collections::HashMap;

use bimap::BiMap;

use crate::{
    error::{Error, Result},
    ObjectName, ObjectType,
};

/// Resolves roles and objects between names and ids.
pub trait CatalogLookup {
    /// The id of the role called `name`.
    fn resolve_role_id(&self, name: &str) -> Result<String>;
    /// The name of the role with id `id`.
    fn role_name(&self, id: &str) -> Result<String>;
    /// The id of the object of `object_type` called `name`.
    fn resolve_object_id(&self, object_type: ObjectType, name: &ObjectName) -> Result<String>;
    /// The qualified name of the object of `object_type` with id `id`.
    fn object_name(&self, object_type: ObjectType, id: &str) -> Result<ObjectName>;
}

/// An in-memory catalog snapshot.
#[derive(Default, Debug, Clone)]
pub struct StaticCatalog {
    /// id <-> name
    roles: BiMap<String, String>,
    objects: HashMap<ObjectType, BiMap<String, ObjectName>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Default::default()
    }

    /// Register a role.
    pub fn add_role(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.roles.insert(id.into(), name.into());
    }

    /// Register an object.
    pub fn add_object(&mut self, object_type: ObjectType, id: impl Into<String>, name: ObjectName) {
        self.objects
            .entry(object_type)
            .or_default()
            .insert(id.into(), name);
    }

    /// Builder-style [`StaticCatalog::add_role`].
    pub fn with_role(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.add_role(id, name);
        self
    }

    /// Builder-style [`StaticCatalog::add_object`].
    pub fn with_object(
        mut self,
        object_type: ObjectType,
        id: impl Into<String>,
        name: ObjectName,
    ) -> Self {
        self.add_object(object_type, id, name);
        self
    }
}

impl CatalogLookup for StaticCatalog {
    fn resolve_role_id(&self, name: &str) -> Result<String> {
        self.roles
            .get_by_right(name)
            .cloned()
            .ok_or_else(|| Error::not_found("role", name))
    }

    fn role_name(&self, id: &str) -> Result<String> {
        self.roles
            .get_by_left(id)
            .cloned()
            .ok_or_else(|| Error::not_found("role", id))
    }

    fn resolve_object_id(&self, object_type: ObjectType, name: &ObjectName) -> Result<String> {
        self.objects
            .get(&object_type)
            .and_then(|m| m.get_by_right(name))
            .cloned()
            .ok_or_else(|| Error::not_found(object_type.name().to_lowercase(), &name.to_string()))
    }

    fn object_name(&self, object_type: ObjectType, id: &str) -> Result<ObjectName> {
        self.objects
            .get(&object_type)
            .and_then(|m| m.get_by_left(id))
            .cloned()
            .ok_or_else(|| Error::not_found(object_type.name().to_lowercase(), id))
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new()
            .with_role("u1", "joe")
            .with_object(ObjectType::Database, "u3", ObjectName::new("materialize"))
            .with_object(
                ObjectType::Table,
                "u20",
                ObjectName::qualified("materialize", "public", "orders"),
            )
    }

    #[test]
    fn roles_resolve_both_ways() -> Result<()> {
        let catalog = catalog();
        assert_eq!(catalog.resolve_role_id("joe")?, "u1");
        assert_eq!(catalog.role_name("u1")?, "joe");
        Ok(())
    }

    #[test]
    fn objects_resolve_both_ways() -> Result<()> {
        let catalog = catalog();
        let orders = ObjectName::qualified("materialize", "public", "orders");
        assert_eq!(catalog.resolve_object_id(ObjectType::Table, &orders)?, "u20");
        assert_eq!(catalog.object_name(ObjectType::Table, "u20")?, orders);
        Ok(())
    }

    #[test]
    fn objects_are_scoped_by_type() {
        let catalog = catalog();
        assert_eq!(
            catalog.object_name(ObjectType::View, "u20"),
            Err(Error::NotFound {
                kind: "view".to_owned(),
                id: "u20".to_owned()
            })
        );
    }

    #[test]
    fn missing_role_is_not_found() {
        assert!(matches!(
            catalog().resolve_role_id("nobody"),
            Err(Error::NotFound { .. })
        ));
    }
}
