//! System privilege statements

use crate::{privilege::Privilege, RoleRef};

use super::Action;

pub(crate) fn system_statement(action: Action, privilege: Privilege, role: &RoleRef) -> String {
    format!("{action} {privilege} ON SYSTEM {} {role};", action.direction())
}

/// `GRANT <privilege> ON SYSTEM TO "<role>";`
pub fn grant_system(privilege: Privilege, role: &RoleRef) -> String {
    system_statement(Action::Grant, privilege, role)
}

/// `REVOKE <privilege> ON SYSTEM FROM "<role>";`
pub fn revoke_system(privilege: Privilege, role: &RoleRef) -> String {
    system_statement(Action::Revoke, privilege, role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_statements() {
        let ops = RoleRef::named("ops");
        assert_eq!(
            grant_system(Privilege::CreateCluster, &ops),
            r#"GRANT CREATECLUSTER ON SYSTEM TO "ops";"#
        );
        assert_eq!(
            revoke_system(Privilege::CreateDb, &RoleRef::Public),
            "REVOKE CREATEDB ON SYSTEM FROM PUBLIC;"
        );
    }
}
