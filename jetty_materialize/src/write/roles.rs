//! Role membership statements

use crate::RoleRef;

use super::Action;

pub(crate) fn role_statement(action: Action, role: &RoleRef, member: &RoleRef) -> String {
    format!("{action} {role} {} {member};", action.direction())
}

/// `GRANT "<role>" TO "<member>";`
pub fn grant_role(role: &RoleRef, member: &RoleRef) -> String {
    role_statement(Action::Grant, role, member)
}

/// `REVOKE "<role>" FROM "<member>";`
pub fn revoke_role(role: &RoleRef, member: &RoleRef) -> String {
    role_statement(Action::Revoke, role, member)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_statements_quote_both_roles() {
        let analysts = RoleRef::named("analysts");
        let joe = RoleRef::named("joe");
        assert_eq!(grant_role(&analysts, &joe), r#"GRANT "analysts" TO "joe";"#);
        assert_eq!(revoke_role(&analysts, &joe), r#"REVOKE "analysts" FROM "joe";"#);
    }
}
