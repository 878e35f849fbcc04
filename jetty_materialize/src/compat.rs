//! Object-type compatibility for the engine's grant grammar.
//!
//! Sources, views and materialized views are distinct catalog objects, but
//! privileges on them are granted through the TABLE surface.

use crate::{
    error::{Error, Result},
    ObjectType,
};

/// The object type to name in a GRANT or REVOKE for an object of type `t`.
pub fn grant_compatible_type(t: ObjectType) -> ObjectType {
    match t {
        ObjectType::Source | ObjectType::View | ObjectType::MaterializedView => ObjectType::Table,
        other => other,
    }
}

/// The plural noun used in `ALTER DEFAULT PRIVILEGES ... ON <noun>`.
///
/// Types without a default-privilege form are rejected.
pub fn default_privilege_noun(t: ObjectType) -> Result<&'static str> {
    match grant_compatible_type(t) {
        ObjectType::Table => Ok("TABLES"),
        ObjectType::Type => Ok("TYPES"),
        ObjectType::Secret => Ok("SECRETS"),
        ObjectType::Connection => Ok("CONNECTIONS"),
        ObjectType::Database => Ok("DATABASES"),
        ObjectType::Schema => Ok("SCHEMAS"),
        ObjectType::Cluster => Ok("CLUSTERS"),
        // INDEX, SINK, SYSTEM
        _ => Err(Error::UnsupportedObjectType {
            object_type: t,
            context: "default privileges",
        }),
    }
}
