//! Filtering, sorting, grouping, and aggregation queries over user records.
//!
//! This crate provides:
//! - [`UserQuery`] - The query operations over a slice of [`User`]s
//! - [`QueryConfig`] - Switches between literal and corrected behavior
//! - [`predicates`] - Ready-made predicates for [`UserQuery::filter_by`]
//!
//! [`User`]: userquery_foundation::User

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod predicates;
pub mod query;

pub use config::{JoinProjection, LastNameSelection, QueryConfig};
pub use predicates::Predicate;
pub use query::{NO_AVERAGE, UserQuery};
