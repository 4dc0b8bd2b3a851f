//! Persistent privilege set with structural sharing.
//!
//! A thin wrapper around `im::OrdSet`, so user records stay cheap to clone
//! and iterate their privileges in a fixed order.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::privilege::Privilege;

/// Persistent ordered set of privileges.
///
/// Cloning is O(1). Modifications return a new set sharing structure with
/// the original. Iteration follows [`Privilege`] declaration order.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PrivilegeSet(im::OrdSet<Privilege>);

impl PrivilegeSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdSet::new())
    }

    /// Returns the number of privileges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the set holds the privilege.
    #[must_use]
    pub fn contains(&self, privilege: Privilege) -> bool {
        self.0.contains(&privilege)
    }

    /// Returns a new set with the privilege inserted.
    #[must_use]
    pub fn insert(&self, privilege: Privilege) -> Self {
        let mut new = self.0.clone();
        new.insert(privilege);
        Self(new)
    }

    /// Returns a new set with the privilege removed.
    #[must_use]
    pub fn remove(&self, privilege: Privilege) -> Self {
        let mut new = self.0.clone();
        new.remove(&privilege);
        Self(new)
    }

    /// Returns an iterator over the privileges in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Privilege> {
        self.0.iter().copied()
    }

    /// Returns a new set that is the union of this set and another.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.clone().union(other.0.clone()))
    }
}

impl fmt::Debug for PrivilegeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl PartialEq for PrivilegeSet {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for PrivilegeSet {}

impl Hash for PrivilegeSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Ordered iteration keeps this consistent with Eq.
        self.len().hash(state);
        for privilege in self.iter() {
            privilege.hash(state);
        }
    }
}

impl FromIterator<Privilege> for PrivilegeSet {
    fn from_iter<I: IntoIterator<Item = Privilege>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Privilege; N]> for PrivilegeSet {
    fn from(privileges: [Privilege; N]) -> Self {
        privileges.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a PrivilegeSet {
    type Item = &'a Privilege;
    type IntoIter = im::ordset::Iter<'a, Privilege>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
