//! Composite keys that identify grants to the reconciler.
//!
//! Each key is a `|`-delimited string whose first field names the kind of
//! record:
//!
//! ```text
//! GRANT|<objectType>|<objectId>|<roleId>|<privilege>
//! GRANT DEFAULT|<objectType>|<granteeId>|<targetId>|<databaseId>|<schemaId>|<privilege>
//! ROLE MEMBER|<roleId>|<memberId>
//! GRANT SYSTEM|<roleId>|<privilege>
//! ```
//!
//! Default grant keys always have all seven fields; an unscoped database or
//! schema is an empty field. Ids are catalog ids and never contain `|`.

use std::{fmt::Display, str::FromStr};

use crate::{
    compat::{default_privilege_noun, grant_compatible_type},
    consts::KEY_DELIMITER,
    error::{Error, Result},
    privilege::{Privilege, PrivilegeCatalog},
    region::{self, Region},
    ObjectType,
};

const GRANT: &str = "GRANT";
const GRANT_DEFAULT: &str = "GRANT DEFAULT";
const ROLE_MEMBER: &str = "ROLE MEMBER";
const GRANT_SYSTEM: &str = "GRANT SYSTEM";

/// The identity of a single privilege grant, default grant, role membership
/// or system grant.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GrantKey {
    Object {
        object_type: ObjectType,
        object_id: String,
        role_id: String,
        privilege: Privilege,
    },
    Default {
        object_type: ObjectType,
        grantee_id: String,
        target_id: String,
        database_id: Option<String>,
        schema_id: Option<String>,
        privilege: Privilege,
    },
    RoleMember {
        role_id: String,
        member_id: String,
    },
    System {
        role_id: String,
        privilege: Privilege,
    },
}

impl GrantKey {
    /// The kind token the key starts with.
    pub fn kind(&self) -> &'static str {
        match self {
            GrantKey::Object { .. } => GRANT,
            GrantKey::Default { .. } => GRANT_DEFAULT,
            GrantKey::RoleMember { .. } => ROLE_MEMBER,
            GrantKey::System { .. } => GRANT_SYSTEM,
        }
    }

    /// Encode with a region tag attached.
    pub fn encode_qualified(&self, region: &Region) -> String {
        region::prefix(region, &self.to_string())
    }

    /// Check the privilege is legal for what the key grants on. Default
    /// grant keys must carry the grant-compatible type, as records do.
    pub fn validate_with(&self, catalog: &PrivilegeCatalog) -> Result<()> {
        match self {
            GrantKey::Object {
                object_type,
                privilege,
                ..
            } => catalog.validate(*object_type, &[*privilege]),
            GrantKey::Default {
                object_type,
                privilege,
                ..
            } => {
                default_privilege_noun(*object_type)?;
                if grant_compatible_type(*object_type) != *object_type {
                    return Err(Error::invalid_key(
                        &self.to_string(),
                        format!("default privileges on {object_type} are kept as TABLE"),
                    ));
                }
                catalog.validate(*object_type, &[*privilege])
            }
            GrantKey::RoleMember { .. } => Ok(()),
            GrantKey::System { privilege, .. } => {
                catalog.validate(ObjectType::System, &[*privilege])
            }
        }
    }

    /// Decode a key that may carry a region tag.
    pub fn decode_qualified(raw: &str) -> Result<(Option<Region>, GrantKey)> {
        let id = region::parse_region_id(raw);
        let key = id.id().parse()?;
        Ok((id.region().cloned(), key))
    }
}

impl Display for GrantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = match self {
            GrantKey::Object {
                object_type,
                object_id,
                role_id,
                privilege,
            } => vec![
                GRANT,
                object_type.name(),
                object_id.as_str(),
                role_id.as_str(),
                privilege.name(),
            ],
            GrantKey::Default {
                object_type,
                grantee_id,
                target_id,
                database_id,
                schema_id,
                privilege,
            } => vec![
                GRANT_DEFAULT,
                object_type.name(),
                grantee_id.as_str(),
                target_id.as_str(),
                database_id.as_deref().unwrap_or_default(),
                schema_id.as_deref().unwrap_or_default(),
                privilege.name(),
            ],
            GrantKey::RoleMember { role_id, member_id } => {
                vec![ROLE_MEMBER, role_id.as_str(), member_id.as_str()]
            }
            GrantKey::System { role_id, privilege } => {
                vec![GRANT_SYSTEM, role_id.as_str(), privilege.name()]
            }
        };
        write!(f, "{}", fields.join(&KEY_DELIMITER.to_string()))
    }
}

impl FromStr for GrantKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(KEY_DELIMITER).collect();
        let (kind, rest) = fields
            .split_first()
            .ok_or_else(|| Error::invalid_key(s, "empty key"))?;

        let expected = match *kind {
            GRANT => 4,
            GRANT_DEFAULT => 6,
            ROLE_MEMBER => 2,
            GRANT_SYSTEM => 2,
            other => return Err(Error::invalid_key(s, format!("unknown kind {other:?}"))),
        };
        if rest.len() != expected {
            return Err(Error::invalid_key(
                s,
                format!("{kind} keys have {expected} fields, found {}", rest.len()),
            ));
        }

        let required = |field: &str, what: &str| -> Result<String> {
            if field.is_empty() {
                Err(Error::invalid_key(s, format!("missing {what}")))
            } else {
                Ok(field.to_owned())
            }
        };
        let optional = |field: &str| (!field.is_empty()).then(|| field.to_owned());

        let key = match *kind {
            GRANT => GrantKey::Object {
                object_type: rest[0].parse()?,
                object_id: required(rest[1], "object id")?,
                role_id: required(rest[2], "role id")?,
                privilege: rest[3].parse()?,
            },
            GRANT_DEFAULT => {
                let database_id = optional(rest[3]);
                let schema_id = optional(rest[4]);
                if database_id.is_none() && schema_id.is_some() {
                    return Err(Error::invalid_key(s, "schema scope without a database"));
                }
                GrantKey::Default {
                    object_type: rest[0].parse()?,
                    grantee_id: required(rest[1], "grantee id")?,
                    target_id: required(rest[2], "target role id")?,
                    database_id,
                    schema_id,
                    privilege: rest[5].parse()?,
                }
            }
            ROLE_MEMBER => GrantKey::RoleMember {
                role_id: required(rest[0], "role id")?,
                member_id: required(rest[1], "member id")?,
            },
            _ => GrantKey::System {
                role_id: required(rest[0], "role id")?,
                privilege: rest[1].parse()?,
            },
        };
        key.validate_with(PrivilegeCatalog::global())?;
        Ok(key)
    }
}
