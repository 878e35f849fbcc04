//! Diff configured grants against the environment

use std::{collections::BTreeSet, fmt::Display};

use colored::Colorize;
use jetty_core::write::utils::diff_btreeset;

use crate::key::GrantKey;

/// The keys to add to and remove from the environment so that it matches
/// the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantDiff {
    /// In the config, not in the environment
    pub add: BTreeSet<GrantKey>,
    /// In the environment, not in the config
    pub remove: BTreeSet<GrantKey>,
}

impl GrantDiff {
    pub fn new(desired: &BTreeSet<GrantKey>, actual: &BTreeSet<GrantKey>) -> Self {
        let (add, remove) = diff_btreeset(desired, actual);
        Self {
            add: add.cloned().collect(),
            remove: remove.cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

impl Display for GrantDiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut text = String::new();
        for key in &self.add {
            text += &format!("{}", format!("  + {key}\n").as_str().green());
        }
        for key in &self.remove {
            text += &format!("{}", format!("  - {key}\n").as_str().red());
        }
        write!(f, "{text}")
    }
}

/// Collect the keys of a batch of records.
pub fn collect_keys<I, F>(records: I, keys: F) -> BTreeSet<GrantKey>
where
    I: IntoIterator,
    F: Fn(I::Item) -> Vec<GrantKey>,
{
    records.into_iter().flat_map(keys).collect()
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;
    use crate::{privilege::Privilege, Grant, ObjectType, RoleMembership};

    #[test]
    fn unchanged_state_has_no_diff() -> Result<()> {
        let grant = Grant::new(ObjectType::Table, "u20", "u1", [Privilege::Select])?;
        let keys = collect_keys([&grant], Grant::keys);
        assert!(GrantDiff::new(&keys, &keys).is_empty());
        Ok(())
    }

    #[test]
    fn changed_privileges_show_as_add_and_remove() -> Result<()> {
        let desired = Grant::new(
            ObjectType::Table,
            "u20",
            "u1",
            [Privilege::Select, Privilege::Insert],
        )?;
        let actual = Grant::new(
            ObjectType::Table,
            "u20",
            "u1",
            [Privilege::Select, Privilege::Delete],
        )?;
        let diff = GrantDiff::new(
            &collect_keys([&desired], Grant::keys),
            &collect_keys([&actual], Grant::keys),
        );
        let add: Vec<_> = diff.add.iter().map(ToString::to_string).collect();
        let remove: Vec<_> = diff.remove.iter().map(ToString::to_string).collect();
        assert_eq!(add, vec!["GRANT|TABLE|u20|u1|INSERT"]);
        assert_eq!(remove, vec!["GRANT|TABLE|u20|u1|DELETE"]);
        Ok(())
    }

    #[test]
    fn display_marks_adds_and_removes() {
        colored::control::set_override(false);
        let diff = GrantDiff::new(
            &collect_keys([RoleMembership::new("u2", "u1", "s1")], |m| vec![m.key()]),
            &BTreeSet::new(),
        );
        assert_eq!(diff.to_string(), "  + ROLE MEMBER|u2|u1\n");
    }
}
