//! Query operations over user records.
//!
//! Every operation on [`UserQuery`] is pure: it borrows the input slice,
//! never mutates it, and returns a fresh container. Returned users are
//! references into the caller's slice.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, trace};
use userquery_foundation::{Privilege, User};

use crate::config::{JoinProjection, LastNameSelection, QueryConfig};
use crate::predicates::{Predicate, all_of};

/// Average reported for an empty user list.
pub const NO_AVERAGE: f64 = -1.0;

/// Stateless query operations over a slice of users.
///
/// The only state is the [`QueryConfig`], which is `Copy`; a `UserQuery`
/// may be shared freely across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct UserQuery {
    config: QueryConfig,
}

impl UserQuery {
    /// Creates a query with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query with the given configuration.
    #[must_use]
    pub fn with_config(config: QueryConfig) -> Self {
        if config.is_corrected() {
            debug!(?config, "query departs from default behavior");
        }
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Ordering
    // -------------------------------------------------------------------------

    /// First names in descending string order. Duplicates are kept.
    #[must_use]
    pub fn first_names_reverse_sorted<'a>(&self, users: &'a [User]) -> Vec<&'a str> {
        trace!(users = users.len(), "first_names_reverse_sorted");
        let mut names: Vec<&str> = users.iter().map(User::first_name).collect();
        names.sort_unstable_by_key(|name| Reverse(*name));
        names
    }

    /// Users by age descending, then first name ascending.
    ///
    /// The sort is stable: users equal on both keys keep their input order.
    #[must_use]
    pub fn sort_by_age_desc_name_asc<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        trace!(users = users.len(), "sort_by_age_desc_name_asc");
        let mut sorted: Vec<&User> = users.iter().collect();
        sorted.sort_by(|a, b| {
            b.age()
                .cmp(&a.age())
                .then_with(|| a.first_name().cmp(b.first_name()))
        });
        sorted
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Every privilege held by anyone, each once, in first-seen order.
    ///
    /// Users are walked in input order and each user's privileges in set
    /// order.
    #[must_use]
    pub fn distinct_privileges(&self, users: &[User]) -> Vec<Privilege> {
        trace!(users = users.len(), "distinct_privileges");
        let mut seen = HashSet::new();
        users
            .iter()
            .flat_map(|user| user.privileges().iter())
            .filter(|privilege| seen.insert(*privilege))
            .collect()
    }

    /// A user holding [`Privilege::Update`] whose age is strictly greater
    /// than `age`.
    ///
    /// Any match satisfies the contract; this returns the first in input
    /// order.
    #[must_use]
    pub fn update_user_older_than<'a>(&self, users: &'a [User], age: i64) -> Option<&'a User> {
        trace!(users = users.len(), age, "update_user_older_than");
        users
            .iter()
            .find(|user| user.has_privilege(Privilege::Update) && i64::from(user.age()) > age)
    }

    /// Users passing every predicate, in input order.
    ///
    /// No predicates means every user passes.
    #[must_use]
    pub fn filter_by<'a>(
        &self,
        users: &'a [User],
        predicates: &[Predicate<'_>],
    ) -> Vec<&'a User> {
        trace!(
            users = users.len(),
            predicates = predicates.len(),
            "filter_by"
        );
        let matches = all_of(predicates);
        users.iter().filter(|&user| matches(user)).collect()
    }

    // -------------------------------------------------------------------------
    // Grouping
    // -------------------------------------------------------------------------

    /// Users grouped by how many privileges they hold.
    ///
    /// Members of each group keep their input order.
    #[must_use]
    pub fn group_by_privilege_count<'a>(
        &self,
        users: &'a [User],
    ) -> BTreeMap<usize, Vec<&'a User>> {
        trace!(users = users.len(), "group_by_privilege_count");
        let mut groups: BTreeMap<usize, Vec<&User>> = BTreeMap::new();
        for user in users {
            groups.entry(user.privileges().len()).or_default().push(user);
        }
        groups
    }

    /// Users grouped by each privilege they hold.
    ///
    /// A user with N privileges appears in N groups. Members of each group
    /// keep their input order.
    #[must_use]
    pub fn group_by_privileges<'a>(
        &self,
        users: &'a [User],
    ) -> BTreeMap<Privilege, Vec<&'a User>> {
        trace!(users = users.len(), "group_by_privileges");
        let mut groups: BTreeMap<Privilege, Vec<&User>> = BTreeMap::new();
        for user in users {
            for privilege in user.privileges().iter() {
                groups.entry(privilege).or_default().push(user);
            }
        }
        groups
    }

    // -------------------------------------------------------------------------
    // Aggregation
    // -------------------------------------------------------------------------

    /// Mean age, or [`NO_AVERAGE`] for an empty slice.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_age(&self, users: &[User]) -> f64 {
        trace!(users = users.len(), "average_age");
        if users.is_empty() {
            return NO_AVERAGE;
        }
        let total: u64 = users.iter().map(|user| u64::from(user.age())).sum();
        total as f64 / users.len() as f64
    }

    /// Number of users carrying each last name.
    #[must_use]
    pub fn last_name_counts<'a>(&self, users: &'a [User]) -> HashMap<&'a str, usize> {
        trace!(users = users.len(), "last_name_counts");
        Self::count_last_names(users)
    }

    /// The "most frequent" last name.
    ///
    /// With [`LastNameSelection::ByName`] (the default) the winner is the
    /// greatest last name in string order, regardless of its count. With
    /// [`LastNameSelection::ByCount`] it is the most common name, ties going
    /// to the greater name. Either way the result is `None` when the winner
    /// occurs exactly once or the slice is empty.
    #[must_use]
    pub fn most_frequent_last_name<'a>(&self, users: &'a [User]) -> Option<&'a str> {
        trace!(users = users.len(), "most_frequent_last_name");
        let counts = Self::count_last_names(users);

        let winner = match self.config.last_name_selection {
            LastNameSelection::ByName => counts.into_iter().max_by_key(|&(name, _)| name),
            LastNameSelection::ByCount => {
                debug!("selecting most frequent last name by count");
                counts
                    .into_iter()
                    .max_by_key(|&(name, count)| (count, name))
            }
        };

        winner
            .filter(|&(_, count)| count != 1)
            .map(|(name, _)| name)
    }

    /// Joins users into one string separated by `delimiter`.
    ///
    /// With [`JoinProjection::LastName`] (the default) last names are joined
    /// and `mapper` is never called. With [`JoinProjection::Mapper`] each
    /// user is projected through `mapper` first.
    #[must_use]
    pub fn convert_to<F>(&self, users: &[User], delimiter: &str, mapper: F) -> String
    where
        F: Fn(&User) -> String,
    {
        trace!(users = users.len(), delimiter, "convert_to");
        match self.config.join_projection {
            JoinProjection::LastName => users
                .iter()
                .map(User::last_name)
                .collect::<Vec<_>>()
                .join(delimiter),
            JoinProjection::Mapper => {
                debug!("joining users through the supplied mapper");
                users.iter().map(mapper).collect::<Vec<_>>().join(delimiter)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Helper methods
    // -------------------------------------------------------------------------

    fn count_last_names(users: &[User]) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for user in users {
            *counts.entry(user.last_name()).or_insert(0) += 1;
        }
        counts
    }
}

// =============================================================================
// Tests
// =============================================================================
