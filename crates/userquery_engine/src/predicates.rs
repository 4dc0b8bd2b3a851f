//! Predicates over users, for [`UserQuery::filter_by`](crate::UserQuery::filter_by).

use userquery_foundation::{Privilege, User};

/// A borrowed predicate over a user.
pub type Predicate<'p> = &'p dyn Fn(&User) -> bool;

/// Combines predicates with logical AND.
///
/// The fold starts from the always-true predicate, so an empty slice accepts
/// every user.
#[must_use]
pub fn all_of<'p>(predicates: &'p [Predicate<'p>]) -> impl Fn(&User) -> bool + 'p {
    move |user| predicates.iter().all(|predicate| predicate(user))
}

/// Matches users strictly older than `age`.
#[must_use]
pub fn older_than(age: i64) -> impl Fn(&User) -> bool {
    move |user| i64::from(user.age()) > age
}

/// Matches users holding `privilege`.
#[must_use]
pub fn has_privilege(privilege: Privilege) -> impl Fn(&User) -> bool {
    move |user| user.has_privilege(privilege)
}

/// Matches users whose last name equals `name`.
#[must_use]
pub fn last_name_is(name: &str) -> impl Fn(&User) -> bool + '_ {
    move |user| user.last_name() == name
}
