mod default_grant;
mod grant;
mod object_name;
mod object_type;
mod role;
mod role_membership;
mod system_grant;

pub use default_grant::{DefaultGrant, DefaultGrantScope};
pub use grant::Grant;
pub use object_name::ObjectName;
pub(crate) use object_name::quote_ident;
pub use object_type::ObjectType;
pub use role::RoleRef;
pub use role_membership::RoleMembership;
pub use system_grant::SystemGrant;

use crate::privilege::Privilege;

/// Drop repeated privileges, keeping the first occurrence of each.
fn dedup_privileges(privileges: impl IntoIterator<Item = Privilege>) -> Vec<Privilege> {
    let mut res: Vec<Privilege> = vec![];
    for p in privileges {
        if !res.contains(&p) {
            res.push(p);
        }
    }
    res
}
