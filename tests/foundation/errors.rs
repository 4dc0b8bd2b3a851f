//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use userquery_foundation::{Error, ErrorKind, Privilege, User};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_argument() {
    let err = Error::invalid_argument("age", "must not be negative");
    assert_eq!(
        err.kind,
        ErrorKind::InvalidArgument {
            argument: "age".to_string(),
            reason: "must not be negative".to_string(),
        }
    );
}

#[test]
fn error_unknown_privilege() {
    let err = Error::unknown_privilege("ROOT");
    assert!(matches!(err.kind, ErrorKind::UnknownPrivilege(_)));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_invalid_argument() {
    let err = Error::invalid_argument("age", "must not be negative");
    assert_eq!(
        format!("{err}"),
        "invalid argument `age`: must not be negative"
    );
}

#[test]
fn error_display_unknown_privilege() {
    let err = Error::unknown_privilege("ROOT");
    assert_eq!(format!("{err}"), "unknown privilege: ROOT");
}

// =============================================================================
// Errors From Constructors
// =============================================================================

#[test]
fn negative_age_is_rejected_immediately() {
    let result = User::try_new("Neg", "Ative", -5, [Privilege::Read]);
    let err = result.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument { .. }));
    assert!(format!("{err}").contains("-5"));
}

#[test]
fn unknown_privilege_name_is_rejected() {
    let err = "superuser".parse::<Privilege>().unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UnknownPrivilege("superuser".to_string())
    );
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::unknown_privilege("x"));
}
