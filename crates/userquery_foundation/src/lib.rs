//! User records, privileges, and errors for userquery.
//!
//! This crate provides:
//! - [`User`] - An immutable user record (names, age, privileges)
//! - [`Privilege`] - The closed set of permission tags
//! - [`PrivilegeSet`] - Persistent ordered set of privileges
//! - [`Error`] - Error types for invalid arguments

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod privilege;
pub mod user;

pub use collections::PrivilegeSet;
pub use error::{Error, ErrorKind, Result};
pub use privilege::Privilege;
pub use user::User;
