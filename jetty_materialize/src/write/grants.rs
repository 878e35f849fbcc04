//! GRANT and REVOKE of privileges on objects

use crate::{compat::grant_compatible_type, privilege::Privilege, ObjectName, ObjectType, RoleRef};

use super::Action;

/// Builds `GRANT <privilege> ON <type> <object> TO <role>;` and its REVOKE.
///
/// `object_type` is the catalog type; the statement names the type the
/// engine grants against (views, sources and materialized views as TABLE).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrantBuilder {
    privilege: Privilege,
    object_type: ObjectType,
    object: ObjectName,
    role: RoleRef,
}

impl GrantBuilder {
    pub fn new(privilege: Privilege, object_type: ObjectType, object: ObjectName, role: RoleRef) -> Self {
        Self {
            privilege,
            object_type,
            object,
            role,
        }
    }

    pub fn grant(&self) -> String {
        self.statement(Action::Grant)
    }

    pub fn revoke(&self) -> String {
        self.statement(Action::Revoke)
    }

    pub(crate) fn statement(&self, action: Action) -> String {
        format!(
            "{action} {} ON {} {} {} {};",
            self.privilege,
            grant_compatible_type(self.object_type),
            self.object,
            action.direction(),
            self.role
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders() -> ObjectName {
        ObjectName::qualified("materialize", "public", "orders")
    }

    #[test]
    fn grant_on_table() {
        let b = GrantBuilder::new(
            Privilege::Select,
            ObjectType::Table,
            orders(),
            RoleRef::named("joe"),
        );
        assert_eq!(
            b.grant(),
            r#"GRANT SELECT ON TABLE "materialize"."public"."orders" TO "joe";"#
        );
        assert_eq!(
            b.revoke(),
            r#"REVOKE SELECT ON TABLE "materialize"."public"."orders" FROM "joe";"#
        );
    }

    #[test]
    fn views_grant_as_tables() {
        let b = GrantBuilder::new(
            Privilege::Select,
            ObjectType::MaterializedView,
            orders(),
            RoleRef::Public,
        );
        assert_eq!(
            b.grant(),
            r#"GRANT SELECT ON TABLE "materialize"."public"."orders" TO PUBLIC;"#
        );
    }

    #[test]
    fn cluster_grants_keep_their_type() {
        let b = GrantBuilder::new(
            Privilege::Usage,
            ObjectType::Cluster,
            ObjectName::new("quickstart"),
            RoleRef::named("analysts"),
        );
        assert_eq!(b.grant(), r#"GRANT USAGE ON CLUSTER "quickstart" TO "analysts";"#);
    }
}
