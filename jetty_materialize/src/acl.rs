//! Parse the engine's ACL column format.
//!
//! An ACL looks like `{u1=arwd/s1,p=r/u1}`: a braced, comma-separated list of
//! `grantee=privilege-letters/grantor` entries.

use std::collections::BTreeMap;

use jetty_core::logging::debug;

use crate::{
    error::{Error, Result},
    privilege::{Privilege, PrivilegeCatalog},
};

/// One `grantee=letters/grantor` entry from an ACL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AclEntry {
    pub grantee: String,
    /// In the order the letters appeared. Duplicates are kept.
    pub privileges: Vec<Privilege>,
    pub grantor: String,
}

/// Parse a whole ACL string using the shared catalog.
///
/// Entries come back in the order they appear. An empty ACL (`{}`) has no
/// entries.
pub fn parse_acl(acl: &str) -> Result<Vec<AclEntry>> {
    parse_acl_with(PrivilegeCatalog::global(), acl)
}

/// Parse a whole ACL string.
pub fn parse_acl_with(catalog: &PrivilegeCatalog, acl: &str) -> Result<Vec<AclEntry>> {
    let inner = acl.strip_prefix('{').unwrap_or(acl);
    let inner = inner.strip_suffix('}').unwrap_or(inner);

    if inner.is_empty() {
        return Ok(vec![]);
    }

    inner
        .split(',')
        .map(|entry| parse_acl_entry(catalog, entry, acl))
        .collect()
}

/// Parse a single entry. `input` is the whole ACL, for error messages.
pub fn parse_acl_entry(catalog: &PrivilegeCatalog, entry: &str, input: &str) -> Result<AclEntry> {
    let malformed = || Error::Parse {
        entry: entry.to_owned(),
        input: input.to_owned(),
    };

    let (grantee, rest) = entry.split_once('=').ok_or_else(malformed)?;
    let (letters, grantor) = rest.split_once('/').ok_or_else(malformed)?;
    let privileges = catalog.parse_codes(letters, entry)?;

    debug!("parsed ACL entry {entry}: {grantee} has {privileges:?} from {grantor}");

    Ok(AclEntry {
        grantee: grantee.to_owned(),
        privileges,
        grantor: grantor.to_owned(),
    })
}

/// Parse each entry and collect who has what, dropping grantors. A grantee
/// that appears more than once gets the privileges of every entry, in order.
pub fn map_grant_privileges<S: AsRef<str>>(
    entries: &[S],
) -> Result<BTreeMap<String, Vec<Privilege>>> {
    map_grant_privileges_with(PrivilegeCatalog::global(), entries)
}

/// [`map_grant_privileges`] against a specific catalog.
pub fn map_grant_privileges_with<S: AsRef<str>>(
    catalog: &PrivilegeCatalog,
    entries: &[S],
) -> Result<BTreeMap<String, Vec<Privilege>>> {
    entries.iter().try_fold(BTreeMap::new(), |mut acc, entry| {
        let entry = entry.as_ref();
        let parsed = parse_acl_entry(catalog, entry, entry)?;
        acc.entry(parsed.grantee)
            .or_insert_with(Vec::new)
            .extend(parsed.privileges);
        Ok(acc)
    })
}
