use serde::{Deserialize, Serialize};

use crate::{
    acl::parse_acl_with,
    error::{Error, Result},
    key::GrantKey,
    privilege::{Privilege, PrivilegeCatalog},
    region::{self, Region},
    ObjectType,
};

/// An account-wide privilege held by a role.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SystemGrant {
    pub role_id: String,
    pub privilege: Privilege,
}

impl SystemGrant {
    /// Only CREATEROLE, CREATEDB and CREATECLUSTER are system privileges.
    pub fn new(role_id: impl Into<String>, privilege: Privilege) -> Result<Self> {
        if !privilege.is_system() {
            return Err(Error::InvalidPrivilege {
                privilege: privilege.name().to_owned(),
                object_type: ObjectType::System,
            });
        }
        Ok(Self {
            role_id: role_id.into(),
            privilege,
        })
    }

    /// Build system grants from the system privileges ACL, one per
    /// grantee and privilege.
    pub fn from_acl(acl: &str) -> Result<Vec<Self>> {
        Self::from_acl_with(PrivilegeCatalog::global(), acl)
    }

    /// [`SystemGrant::from_acl`] against a specific catalog.
    pub fn from_acl_with(catalog: &PrivilegeCatalog, acl: &str) -> Result<Vec<Self>> {
        let mut res = vec![];
        for entry in parse_acl_with(catalog, acl)? {
            for privilege in entry.privileges {
                let grant = Self::new(entry.grantee.to_owned(), privilege)?;
                if !res.contains(&grant) {
                    res.push(grant);
                }
            }
        }
        Ok(res)
    }

    pub fn key(&self) -> GrantKey {
        GrantKey::System {
            role_id: self.role_id.to_owned(),
            privilege: self.privilege,
        }
    }

    /// The key with its region attached, as the reconciler stores it.
    pub fn qualified_key(&self, region: &Region) -> String {
        region::prefix(region, &self.key().to_string())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[test]
    fn only_system_privileges_are_accepted() {
        assert!(SystemGrant::new("u1", Privilege::CreateDb).is_ok());
        assert!(matches!(
            SystemGrant::new("u1", Privilege::Usage),
            Err(Error::InvalidPrivilege { .. })
        ));
    }

    #[test]
    fn keys_are_region_qualified() -> Result<()> {
        let g = SystemGrant::new("u1", Privilege::CreateCluster)?;
        assert_eq!(g.key().to_string(), "GRANT SYSTEM|u1|CREATECLUSTER");
        assert_eq!(
            g.qualified_key(&Region::new("aws/us-east-1")),
            "aws/us-east-1:GRANT SYSTEM|u1|CREATECLUSTER"
        );
        Ok(())
    }

    #[test]
    fn from_acl_flattens_privileges() -> Result<()> {
        let grants = SystemGrant::from_acl("{s1=RBN/s1,u4=B/s1}")?;
        assert_eq!(grants.len(), 4);
        assert_eq!(grants[3], SystemGrant::new("u4", Privilege::CreateDb)?);
        Ok(())
    }

    #[test]
    fn from_acl_with_uses_the_given_catalog() -> Result<()> {
        let catalog = PrivilegeCatalog::global();
        assert_eq!(
            SystemGrant::from_acl_with(catalog, "{u4=N/s1}")?,
            vec![SystemGrant::new("u4", Privilege::CreateCluster)?]
        );
        assert!(matches!(
            SystemGrant::from_acl_with(catalog, "{u4=r/s1}"),
            Err(Error::InvalidPrivilege { .. })
        ));
        Ok(())
    }
}
