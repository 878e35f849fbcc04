//! write path utility functions

use std::collections::BTreeSet;

/// Diff two sets. Returns the items only in `config` (to add) and the items
/// only in `env` (to remove), both in sorted order.
pub fn diff_btreeset<'a, T: Ord>(
    config: &'a BTreeSet<T>,
    env: &'a BTreeSet<T>,
) -> (
    impl Iterator<Item = &'a T> + 'a,
    impl Iterator<Item = &'a T> + 'a,
) {
    (config.difference(env), env.difference(config))
}
