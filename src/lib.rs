//! userquery - Queries over in-memory user records
//!
//! This crate re-exports both layers of the userquery system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: userquery_engine     — UserQuery operations, predicates, config
//! Layer 0: userquery_foundation — Core types (User, Privilege, Error)
//! ```
//!
//! # Example
//!
//! ```
//! use userquery::{Privilege, User, UserQuery};
//!
//! let users = vec![
//!     User::new("Ann", "Lee", 40).with_privilege(Privilege::Update),
//!     User::new("Bob", "Kim", 25).with_privilege(Privilege::Read),
//! ];
//!
//! let query = UserQuery::new();
//! assert_eq!(query.first_names_reverse_sorted(&users), vec!["Bob", "Ann"]);
//! assert_eq!(query.average_age(&users), 32.5);
//! assert!(query.update_user_older_than(&users, 30).is_some());
//! ```

pub use userquery_engine as engine;
pub use userquery_foundation as foundation;

pub use userquery_engine::{
    JoinProjection, LastNameSelection, NO_AVERAGE, Predicate, QueryConfig, UserQuery,
};
pub use userquery_foundation::{Error, ErrorKind, Privilege, PrivilegeSet, Result, User};
