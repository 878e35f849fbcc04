//! ALTER DEFAULT PRIVILEGES statements

use crate::{
    compat::default_privilege_noun,
    entry_types::quote_ident,
    error::Result,
    privilege::Privilege,
    ObjectType, RoleRef,
};

use super::Action;

/// Builds `ALTER DEFAULT PRIVILEGES` statements.
///
/// A PUBLIC target means every role (`FOR ALL ROLES`); a PUBLIC grantee is
/// the bare PUBLIC keyword. The two are independent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultGrantBuilder {
    object_type: ObjectType,
    grantee: RoleRef,
    target: RoleRef,
    database: Option<String>,
    schema: Option<String>,
    privilege: Privilege,
}

impl DefaultGrantBuilder {
    pub fn new(object_type: ObjectType, grantee: RoleRef, target: RoleRef, privilege: Privilege) -> Self {
        Self {
            object_type,
            grantee,
            target,
            database: None,
            schema: None,
            privilege,
        }
    }

    /// Only objects created in `database`.
    pub fn in_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self.schema = None;
        self
    }

    /// Only objects created in `database.schema`.
    pub fn in_schema(mut self, database: impl Into<String>, schema: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self.schema = Some(schema.into());
        self
    }

    pub fn grant(&self) -> Result<String> {
        self.statement(Action::Grant)
    }

    pub fn revoke(&self) -> Result<String> {
        self.statement(Action::Revoke)
    }

    pub(crate) fn statement(&self, action: Action) -> Result<String> {
        let noun = default_privilege_noun(self.object_type)?;
        let mut parts = vec!["ALTER DEFAULT PRIVILEGES".to_owned()];

        parts.push(match &self.target {
            RoleRef::Public => "FOR ALL ROLES".to_owned(),
            target => format!("FOR ROLE {target}"),
        });

        match (&self.database, &self.schema) {
            (Some(database), Some(schema)) => parts.push(format!(
                "IN SCHEMA {}.{}",
                quote_ident(database),
                quote_ident(schema)
            )),
            (Some(database), None) => parts.push(format!("IN DATABASE {}", quote_ident(database))),
            _ => (),
        }

        parts.push(format!(
            "{action} {} ON {noun} {} {}",
            self.privilege,
            action.direction(),
            self.grantee
        ));

        Ok(format!("{};", parts.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;
    use crate::error::Error;

    #[test]
    fn public_target_is_all_roles() -> Result<()> {
        let b = DefaultGrantBuilder::new(
            ObjectType::Table,
            RoleRef::named("joe"),
            RoleRef::Public,
            Privilege::Select,
        );
        assert_eq!(
            b.grant()?,
            r#"ALTER DEFAULT PRIVILEGES FOR ALL ROLES GRANT SELECT ON TABLES TO "joe";"#
        );
        Ok(())
    }

    #[test]
    fn public_grantee_is_bare() -> Result<()> {
        let b = DefaultGrantBuilder::new(
            ObjectType::Table,
            RoleRef::Public,
            RoleRef::named("managers"),
            Privilege::Select,
        );
        assert_eq!(
            b.grant()?,
            r#"ALTER DEFAULT PRIVILEGES FOR ROLE "managers" GRANT SELECT ON TABLES TO PUBLIC;"#
        );
        Ok(())
    }

    #[test]
    fn public_target_and_grantee_apply_together() -> Result<()> {
        let b = DefaultGrantBuilder::new(
            ObjectType::Type,
            RoleRef::Public,
            RoleRef::Public,
            Privilege::Usage,
        );
        assert_eq!(
            b.revoke()?,
            "ALTER DEFAULT PRIVILEGES FOR ALL ROLES REVOKE USAGE ON TYPES FROM PUBLIC;"
        );
        Ok(())
    }

    #[test]
    fn schema_scope_wins_over_database() -> Result<()> {
        let b = DefaultGrantBuilder::new(
            ObjectType::View,
            RoleRef::named("joe"),
            RoleRef::named("etl"),
            Privilege::Select,
        )
        .in_schema("materialize", "public");
        assert_eq!(
            b.grant()?,
            r#"ALTER DEFAULT PRIVILEGES FOR ROLE "etl" IN SCHEMA "materialize"."public" GRANT SELECT ON TABLES TO "joe";"#
        );
        Ok(())
    }

    #[test]
    fn database_scope() -> Result<()> {
        let b = DefaultGrantBuilder::new(
            ObjectType::Schema,
            RoleRef::named("joe"),
            RoleRef::named("etl"),
            Privilege::Create,
        )
        .in_database("materialize");
        assert_eq!(
            b.revoke()?,
            r#"ALTER DEFAULT PRIVILEGES FOR ROLE "etl" IN DATABASE "materialize" REVOKE CREATE ON SCHEMAS FROM "joe";"#
        );
        Ok(())
    }

    #[test]
    fn unsupported_types_fail() {
        let b = DefaultGrantBuilder::new(
            ObjectType::Index,
            RoleRef::Public,
            RoleRef::Public,
            Privilege::Select,
        );
        assert!(matches!(b.grant(), Err(Error::UnsupportedObjectType { .. })));
    }
}
