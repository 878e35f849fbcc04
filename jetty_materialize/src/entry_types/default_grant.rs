use serde::{Deserialize, Serialize};

use crate::{
    compat::{default_privilege_noun, grant_compatible_type},
    error::{Error, Result},
    key::GrantKey,
    privilege::{Privilege, PrivilegeCatalog},
    ObjectType,
};

use super::dedup_privileges;

/// Where a default grant applies. Narrower scopes win.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DefaultGrantScope {
    Global,
    Database { database_id: String },
    Schema { database_id: String, schema_id: String },
}

/// A standing rule: objects of `object_type` created in scope by
/// `target_role_id` are granted `privileges` to `grantee_id`.
///
/// All ids are catalog ids; PUBLIC is `p`, and a PUBLIC target means every
/// role.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefaultGrant {
    pub object_type: ObjectType,
    pub grantee_id: String,
    pub target_role_id: String,
    pub database_id: Option<String>,
    pub schema_id: Option<String>,
    pub privileges: Vec<Privilege>,
}

impl DefaultGrant {
    /// A global default grant. Narrow it with [`DefaultGrant::in_database`]
    /// or [`DefaultGrant::in_schema`].
    ///
    /// The engine keeps default privileges for views, sources and
    /// materialized views as TABLES rules, so the record holds the
    /// grant-compatible type.
    pub fn new(
        object_type: ObjectType,
        grantee_id: impl Into<String>,
        target_role_id: impl Into<String>,
        privileges: impl IntoIterator<Item = Privilege>,
    ) -> Result<Self> {
        Self::new_with(
            PrivilegeCatalog::global(),
            object_type,
            grantee_id,
            target_role_id,
            privileges,
        )
    }

    /// [`DefaultGrant::new`] against a specific catalog.
    pub fn new_with(
        catalog: &PrivilegeCatalog,
        object_type: ObjectType,
        grantee_id: impl Into<String>,
        target_role_id: impl Into<String>,
        privileges: impl IntoIterator<Item = Privilege>,
    ) -> Result<Self> {
        default_privilege_noun(object_type)?;
        let object_type = grant_compatible_type(object_type);
        let privileges = dedup_privileges(privileges);
        catalog.validate(object_type, &privileges)?;
        Ok(Self {
            object_type,
            grantee_id: grantee_id.into(),
            target_role_id: target_role_id.into(),
            database_id: None,
            schema_id: None,
            privileges,
        })
    }

    /// Build a default grant from a row of the default privileges catalog
    /// table, whose privileges are ACL letters.
    pub fn from_catalog_row(
        object_type: &str,
        target_role_id: &str,
        database_id: Option<&str>,
        schema_id: Option<&str>,
        grantee_id: &str,
        letters: &str,
    ) -> Result<Self> {
        Self::from_catalog_row_with(
            PrivilegeCatalog::global(),
            object_type,
            target_role_id,
            database_id,
            schema_id,
            grantee_id,
            letters,
        )
    }

    /// [`DefaultGrant::from_catalog_row`] against a specific catalog.
    pub fn from_catalog_row_with(
        catalog: &PrivilegeCatalog,
        object_type: &str,
        target_role_id: &str,
        database_id: Option<&str>,
        schema_id: Option<&str>,
        grantee_id: &str,
        letters: &str,
    ) -> Result<Self> {
        let privileges = catalog.parse_codes(letters, letters)?;
        let grant = Self::new_with(
            catalog,
            object_type.parse()?,
            grantee_id,
            target_role_id,
            privileges,
        )?;
        match (database_id, schema_id) {
            (Some(db), Some(schema)) => Ok(grant.in_schema(db, schema)),
            (Some(db), None) => Ok(grant.in_database(db)),
            (None, Some(schema)) => Err(Error::SchemaWithoutDatabase {
                schema_id: schema.to_owned(),
            }),
            (None, None) => Ok(grant),
        }
    }

    /// Restrict to objects created in a database.
    pub fn in_database(mut self, database_id: impl Into<String>) -> Self {
        self.database_id = Some(database_id.into());
        self.schema_id = None;
        self
    }

    /// Restrict to objects created in a schema.
    pub fn in_schema(mut self, database_id: impl Into<String>, schema_id: impl Into<String>) -> Self {
        self.database_id = Some(database_id.into());
        self.schema_id = Some(schema_id.into());
        self
    }

    pub fn scope(&self) -> DefaultGrantScope {
        match (&self.database_id, &self.schema_id) {
            (Some(database_id), Some(schema_id)) => DefaultGrantScope::Schema {
                database_id: database_id.to_owned(),
                schema_id: schema_id.to_owned(),
            },
            (Some(database_id), None) => DefaultGrantScope::Database {
                database_id: database_id.to_owned(),
            },
            _ => DefaultGrantScope::Global,
        }
    }

    /// One key per privilege.
    pub fn keys(&self) -> Vec<GrantKey> {
        let (database_id, schema_id) = match self.scope() {
            DefaultGrantScope::Global => (None, None),
            DefaultGrantScope::Database { database_id } => (Some(database_id), None),
            DefaultGrantScope::Schema {
                database_id,
                schema_id,
            } => (Some(database_id), Some(schema_id)),
        };
        self.privileges
            .iter()
            .map(|privilege| GrantKey::Default {
                object_type: self.object_type,
                grantee_id: self.grantee_id.to_owned(),
                target_id: self.target_role_id.to_owned(),
                database_id: database_id.clone(),
                schema_id: schema_id.clone(),
                privilege: *privilege,
            })
            .collect()
    }
}
