use serde::{Deserialize, Serialize};

use crate::key::GrantKey;

/// Membership of `member_id` in `role_id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleMembership {
    pub role_id: String,
    pub member_id: String,
    /// Provenance only. Not part of the membership's identity.
    pub grantor_id: String,
}

impl RoleMembership {
    pub fn new(
        role_id: impl Into<String>,
        member_id: impl Into<String>,
        grantor_id: impl Into<String>,
    ) -> Self {
        Self {
            role_id: role_id.into(),
            member_id: member_id.into(),
            grantor_id: grantor_id.into(),
        }
    }

    pub fn key(&self) -> GrantKey {
        GrantKey::RoleMember {
            role_id: self.role_id.to_owned(),
            member_id: self.member_id.to_owned(),
        }
    }
}
