//! Integration tests for Privilege and PrivilegeSet
//!
//! Tests parsing, display, ordering, and persistent set semantics.

use userquery_foundation::{Privilege, PrivilegeSet};

// =============================================================================
// Privilege
// =============================================================================

#[test]
fn privilege_names() {
    let names: Vec<&str> = Privilege::ALL.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["CREATE", "READ", "WRITE", "UPDATE", "DELETE"]);
}

#[test]
fn privilege_parse_display_agree() {
    for privilege in Privilege::ALL {
        let parsed: Privilege = privilege.to_string().parse().unwrap();
        assert_eq!(parsed, privilege);
    }
}

#[test]
fn privilege_parse_case_insensitive() {
    assert_eq!("update".parse::<Privilege>().unwrap(), Privilege::Update);
    assert_eq!("UpDaTe".parse::<Privilege>().unwrap(), Privilege::Update);
}

// =============================================================================
// PrivilegeSet
// =============================================================================

#[test]
fn set_empty() {
    let s = PrivilegeSet::new();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert_eq!(s, PrivilegeSet::default());
}

#[test]
fn set_immutability() {
    let s1 = PrivilegeSet::new().insert(Privilege::Read);
    let s2 = s1.insert(Privilege::Write);

    // s1 is unchanged
    assert_eq!(s1.len(), 1);
    assert_eq!(s2.len(), 2);
    assert!(!s1.contains(Privilege::Write));
}

#[test]
fn set_remove_missing_is_noop() {
    let s = PrivilegeSet::from([Privilege::Read]);
    assert_eq!(s.remove(Privilege::Delete), s);
}

#[test]
fn set_iteration_order_is_declaration_order() {
    let s: PrivilegeSet = [Privilege::Delete, Privilege::Read, Privilege::Create]
        .into_iter()
        .collect();
    let by_ref: Vec<Privilege> = (&s).into_iter().copied().collect();
    assert_eq!(
        by_ref,
        vec![Privilege::Create, Privilege::Read, Privilege::Delete]
    );
    assert_eq!(s.iter().collect::<Vec<_>>(), by_ref);
}

#[test]
fn set_union() {
    let a = PrivilegeSet::from([Privilege::Read]);
    let b = PrivilegeSet::from([Privilege::Update]);
    let u = a.union(&b);
    assert_eq!(u, PrivilegeSet::from([Privilege::Read, Privilege::Update]));
    assert_eq!(a.len(), 1);
}

#[test]
fn set_debug_lists_members() {
    let s = PrivilegeSet::from([Privilege::Write, Privilege::Read]);
    assert_eq!(format!("{s:?}"), "{Read, Write}");
}
