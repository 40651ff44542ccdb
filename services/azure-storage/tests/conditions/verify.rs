use azsign_azure_storage::{check, verify, AccessCondition, ResourceState};
use azsign_core::time::DateTime;
use azsign_core::ErrorKind;
use test_case::test_case;

use crate::test_time;

fn state(etag: &str) -> ResourceState {
    ResourceState::new(etag, test_time())
}

fn state_modified_at(last_modified: DateTime) -> ResourceState {
    ResourceState::new("abc", last_modified)
}

fn seconds(n: i64) -> chrono::TimeDelta {
    chrono::TimeDelta::try_seconds(n).expect("in bounds")
}

#[test_case("abc"; "plain")]
#[test_case("\"xyz\""; "quoted")]
#[test_case("*"; "wildcard itself")]
fn test_if_match_wildcard_always_passes(etag: &str) {
    assert!(verify(&AccessCondition::if_match("*").unwrap(), &state(etag)));
    assert!(verify(&AccessCondition::if_exists(), &state(etag)));
}

#[test_case("abc", true; "same etag")]
#[test_case("\"abc\"", true; "same etag quoted")]
#[test_case("xyz", false; "different etag")]
fn test_if_match(current: &str, expected: bool) {
    let cond = AccessCondition::if_match("abc").unwrap();
    assert_eq!(verify(&cond, &state(current)), expected);
}

#[test_case("abc", false; "same etag")]
#[test_case("xyz", true; "different etag")]
fn test_if_none_match(current: &str, expected: bool) {
    let cond = AccessCondition::if_none_match("abc").unwrap();
    assert_eq!(verify(&cond, &state(current)), expected);
}

#[test_case("W/\"abc\"", true; "same weak etag")]
#[test_case("\"abc\"", false; "strong etag with same value")]
#[test_case("W/\"xyz\"", false; "different weak etag")]
fn test_if_match_weak_etag(current: &str, expected: bool) {
    let cond = AccessCondition::if_match("W/\"abc\"").unwrap();
    assert_eq!(verify(&cond, &state(current)), expected);

    let cond = AccessCondition::if_none_match("W/\"abc\"").unwrap();
    assert_eq!(verify(&cond, &state(current)), !expected);
}

#[test]
fn test_if_none_match_wildcard_is_literal() {
    // Only an ETag that is literally `*` fails, any real ETag passes.
    assert!(verify(&AccessCondition::if_not_exists(), &state("abc")));
    assert!(!verify(&AccessCondition::if_not_exists(), &state("*")));
}

#[test_case(-1, false; "modified before")]
#[test_case(0, false; "modified exactly at")]
#[test_case(1, true; "modified after")]
fn test_if_modified_since(offset: i64, expected: bool) {
    let cond = AccessCondition::if_modified_since(test_time());
    let current = state_modified_at(test_time() + seconds(offset));

    assert_eq!(verify(&cond, &current), expected);
}

#[test_case(-1, true; "modified before")]
#[test_case(0, true; "modified exactly at")]
#[test_case(1, false; "modified after")]
fn test_if_unmodified_since(offset: i64, expected: bool) {
    let cond = AccessCondition::if_unmodified_since(test_time());
    let current = state_modified_at(test_time() + seconds(offset));

    assert_eq!(verify(&cond, &current), expected);
}

#[test]
fn test_none_always_passes() {
    assert!(verify(&AccessCondition::none(), &state("abc")));
    assert!(check(&AccessCondition::none(), &state("abc")).is_ok());
}

#[test]
fn test_check_surfaces_precondition_failed() {
    let cond = AccessCondition::if_none_match("abc").unwrap();

    let err = check(&cond, &state("abc")).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::PreconditionFailed);
    assert!(err.is_precondition_failed());
    assert!(!err.is_signing_error());
    assert!(!err.is_retryable());
}
