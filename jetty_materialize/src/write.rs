//! Write path for the Materialize connector
//!
//! Turns a [`GrantDiff`] into the statements that bring the environment in
//! line with the configuration.

mod default_grants;
mod grants;
mod roles;
mod system;

use std::fmt::Display;

use jetty_core::logging::debug;

pub use default_grants::DefaultGrantBuilder;
pub use grants::GrantBuilder;
pub use roles::{grant_role, revoke_role};
pub use system::{grant_system, revoke_system};

use crate::{
    catalog::CatalogLookup, diff::GrantDiff, error::Result, key::GrantKey, ObjectType, RoleRef,
};

/// Statements in execution order: revokes, then role memberships and
/// system privileges, then object and default grants.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct PrioritizedQueries(pub Vec<String>, pub Vec<String>, pub Vec<String>);

impl PrioritizedQueries {
    pub fn extend(&mut self, other: &PrioritizedQueries) {
        self.0.extend(other.0.clone());
        self.1.extend(other.1.clone());
        self.2.extend(other.2.clone());
    }

    pub fn flatten(&self) -> Vec<String> {
        [self.0.to_owned(), self.1.to_owned(), self.2.to_owned()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
    }

    pub fn len(&self) -> usize {
        self.0.len() + self.1.len() + self.2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Whether a statement adds or removes access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Grant,
    Revoke,
}

impl Action {
    /// TO for grants, FROM for revokes.
    pub fn direction(&self) -> &'static str {
        match self {
            Action::Grant => "TO",
            Action::Revoke => "FROM",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Grant => write!(f, "GRANT"),
            Action::Revoke => write!(f, "REVOKE"),
        }
    }
}

/// Render every change in `diff`, resolving ids to names through `catalog`.
pub fn prepare_queries(diff: &GrantDiff, catalog: &dyn CatalogLookup) -> Result<PrioritizedQueries> {
    let mut res = queries_for_keys(&diff.remove, Action::Revoke, catalog)?;
    res.extend(&queries_for_keys(&diff.add, Action::Grant, catalog)?);

    debug!("prepared {} statements", res.len());
    Ok(res)
}

/// Revokes all land in the first tier. Grants of role membership and
/// system privileges go in the second, object and default grants in the
/// third.
fn queries_for_keys<'a>(
    keys: impl IntoIterator<Item = &'a GrantKey>,
    action: Action,
    catalog: &dyn CatalogLookup,
) -> Result<PrioritizedQueries> {
    let mut res = PrioritizedQueries::default();
    for key in keys {
        let statement = statement_for_key(key, action, catalog)?;
        match (action, key) {
            (Action::Revoke, _) => res.0.push(statement),
            (Action::Grant, GrantKey::RoleMember { .. } | GrantKey::System { .. }) => {
                res.1.push(statement)
            }
            (Action::Grant, GrantKey::Object { .. } | GrantKey::Default { .. }) => {
                res.2.push(statement)
            }
        }
    }
    Ok(res)
}

/// The statement that grants or revokes exactly what `key` identifies.
pub fn statement_for_key(
    key: &GrantKey,
    action: Action,
    catalog: &dyn CatalogLookup,
) -> Result<String> {
    let role_name = |id: &str| RoleRef::from_id(id).to_name(catalog);

    Ok(match key {
        GrantKey::Object {
            object_type,
            object_id,
            role_id,
            privilege,
        } => GrantBuilder::new(
            *privilege,
            *object_type,
            catalog.object_name(*object_type, object_id)?,
            role_name(role_id)?,
        )
        .statement(action),
        GrantKey::Default {
            object_type,
            grantee_id,
            target_id,
            database_id,
            schema_id,
            privilege,
        } => {
            let builder = DefaultGrantBuilder::new(
                *object_type,
                role_name(grantee_id)?,
                role_name(target_id)?,
                *privilege,
            );
            let builder = match (database_id, schema_id) {
                (Some(database_id), Some(schema_id)) => builder.in_schema(
                    catalog.object_name(ObjectType::Database, database_id)?.name,
                    catalog.object_name(ObjectType::Schema, schema_id)?.name,
                ),
                (Some(database_id), None) => {
                    builder.in_database(catalog.object_name(ObjectType::Database, database_id)?.name)
                }
                _ => builder,
            };
            builder.statement(action)?
        }
        GrantKey::RoleMember { role_id, member_id } => {
            roles::role_statement(action, &role_name(role_id)?, &role_name(member_id)?)
        }
        GrantKey::System { role_id, privilege } => {
            system::system_statement(action, *privilege, &role_name(role_id)?)
        }
    })
}
