//! Privilege tags held by users.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A permission tag a user may hold.
///
/// The set is closed. Variant order is the iteration order of a
/// [`PrivilegeSet`](crate::PrivilegeSet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Privilege {
    /// May create records.
    Create,
    /// May read records.
    Read,
    /// May write records.
    Write,
    /// May update existing records.
    Update,
    /// May delete records.
    Delete,
}

impl Privilege {
    /// Every privilege, in declaration order.
    pub const ALL: [Privilege; 5] = [
        Privilege::Create,
        Privilege::Read,
        Privilege::Write,
        Privilege::Update,
        Privilege::Delete,
    ];

    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Privilege {
    type Err = Error;

    /// Parses a privilege name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::unknown_privilege(name))
    }
}
