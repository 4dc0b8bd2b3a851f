//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: User, Privilege, PrivilegeSet, and Error.

mod errors;
mod privileges;
