//! Errors raised while parsing, validating and encoding privilege state.
//!
//! These are local to a single record or statement and are never retried.
//! Orchestration code wraps them in `anyhow` with context.

use thiserror::Error;

use crate::ObjectType;

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong turning catalog state into keys and SQL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An ACL entry was missing its `=` or its `/`.
    #[error("malformed ACL entry {entry:?} in {input:?}")]
    Parse {
        /// The offending entry
        entry: String,
        /// The whole ACL string
        input: String,
    },

    /// A privilege letter with no canonical name.
    #[error("unknown privilege code {code:?} in {entry:?}")]
    UnknownPrivilegeCode {
        /// The letter
        code: char,
        /// Where it came from
        entry: String,
    },

    /// A privilege name with no known code.
    #[error("unknown privilege {0:?}")]
    UnknownPrivilege(String),

    /// An object type name we don't recognize.
    #[error("unknown object type {0:?}")]
    UnknownObjectType(String),

    /// A privilege that can't be granted on the given object type.
    #[error("privilege {privilege} is not valid on {object_type}")]
    InvalidPrivilege {
        /// The privilege name
        privilege: String,
        /// The type it was granted against
        object_type: ObjectType,
    },

    /// An object type that can't be used in this context.
    #[error("object type {object_type} is not supported for {context}")]
    UnsupportedObjectType {
        /// The object type
        object_type: ObjectType,
        /// What we were trying to do with it
        context: &'static str,
    },

    /// A default privilege scoped to a schema, with no database.
    #[error("schema {schema_id:?} is scoped without a database")]
    SchemaWithoutDatabase {
        /// The schema id
        schema_id: String,
    },

    /// A composite key that doesn't decode.
    #[error("invalid grant key {key:?}: {reason}")]
    InvalidKey {
        /// The raw key
        key: String,
        /// Why it was rejected
        reason: String,
    },

    /// A role or object id/name that the catalog doesn't know about.
    #[error("{kind} {id:?} not found")]
    NotFound {
        /// Role, database, schema, ...
        kind: String,
        /// The id or name that was looked up
        id: String,
    },
}

impl Error {
    pub(crate) fn invalid_key(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(kind: impl Into<String>, id: &str) -> Self {
        Self::NotFound {
            kind: kind.into(),
            id: id.to_owned(),
        }
    }
}
