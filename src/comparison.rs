//! Structural equality for entity definitions.

use crate::entity::{Entity, CHANGELOG_DATE_KEY};

/// Compares two entities field by field, ignoring `changelogDate`.
///
/// The changelog date is volatile: callers may supply a fresh one on every
/// export while the on-disk value stays authoritative, so it must not make
/// an otherwise identical entity look changed.
pub fn entities_equal(on_disk: &Entity, candidate: &Entity) -> bool {
    let mut a = on_disk.fields().clone();
    let mut b = candidate.fields().clone();
    a.remove(CHANGELOG_DATE_KEY);
    b.remove(CHANGELOG_DATE_KEY);
    a == b
}
