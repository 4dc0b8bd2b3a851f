//! Immutable user records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::PrivilegeSet;
use crate::error::{Error, Result};
use crate::privilege::Privilege;

/// A user record: names, age, and the privileges held.
///
/// Users are values. The builder methods return a new record and leave the
/// original untouched; the privilege set is shared structurally.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct User {
    first_name: String,
    last_name: String,
    age: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    privileges: PrivilegeSet,
}

impl User {
    /// Creates a user holding no privileges.
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            privileges: PrivilegeSet::new(),
        }
    }

    /// Creates a user from a signed age, as handed over by hosts that do not
    /// track the sign in the type.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// if `age` is negative or does not fit in a `u32`.
    pub fn try_new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: i64,
        privileges: impl IntoIterator<Item = Privilege>,
    ) -> Result<Self> {
        let age = u32::try_from(age).map_err(|_| {
            Error::invalid_argument("age", format!("expected 0..={}, got {age}", u32::MAX))
        })?;
        Ok(Self::new(first_name, last_name, age).with_privileges(privileges))
    }

    /// Returns a copy of this user that also holds `privilege`.
    #[must_use]
    pub fn with_privilege(&self, privilege: Privilege) -> Self {
        Self {
            privileges: self.privileges.insert(privilege),
            ..self.clone()
        }
    }

    /// Returns a copy of this user that also holds every given privilege.
    #[must_use]
    pub fn with_privileges(&self, privileges: impl IntoIterator<Item = Privilege>) -> Self {
        let added: PrivilegeSet = privileges.into_iter().collect();
        Self {
            privileges: self.privileges.union(&added),
            ..self.clone()
        }
    }

    /// The user's first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The user's last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The user's age in years.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// The privileges this user holds.
    #[must_use]
    pub fn privileges(&self) -> &PrivilegeSet {
        &self.privileges
    }

    /// Returns true if the user holds `privilege`.
    #[must_use]
    pub fn has_privilege(&self, privilege: Privilege) -> bool {
        self.privileges.contains(privilege)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({}) [", self.first_name, self.last_name, self.age)?;
        for (i, privilege) in self.privileges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{privilege}")?;
        }
        f.write_str("]")
    }
}
