use crate::{AuthError, Claims};

use std::time::Duration;

use proptest::prelude::*;

fn claims() -> Claims {
    Claims::new(7, "alice", 1_000, Duration::from_secs(3_600))
}

#[test]
fn new_sets_subject_and_absolute_expiry() {
    let claims = claims();

    assert_eq!(claims.sub, "7");
    assert_eq!(claims.user_id, 7);
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.iat, 1_000);
    assert_eq!(claims.exp, 4_600);
    assert!(claims.validate().is_ok());
}

#[test]
fn expiry_instant_itself_counts_as_expired() {
    let claims = claims();

    assert!(!claims.is_expired_at(4_599));
    assert!(claims.is_expired_at(4_600));
    assert!(claims.is_expired_at(4_601));
}

#[test]
fn given_mismatched_subject_when_validated_then_invalid_claim() {
    let mut claims = claims();
    claims.sub = "8".to_string();

    let result = claims.validate();

    assert!(matches!(result, Err(AuthError::InvalidClaim { ref claim, .. }) if claim == "sub"));
}

#[test]
fn given_empty_username_when_validated_then_invalid_claim() {
    let mut claims = claims();
    claims.username.clear();

    assert!(matches!(
        claims.validate(),
        Err(AuthError::InvalidClaim { ref claim, .. }) if claim == "username"
    ));
}

#[test]
fn given_non_positive_user_id_when_validated_then_invalid_claim() {
    let claims = Claims::new(0, "alice", 1_000, Duration::from_secs(60));

    assert!(matches!(
        claims.validate(),
        Err(AuthError::InvalidClaim { ref claim, .. }) if claim == "user_id"
    ));
}

#[test]
fn huge_ttl_saturates_instead_of_overflowing() {
    let claims = Claims::new(1, "alice", i64::MAX - 10, Duration::from_secs(u64::MAX));

    assert_eq!(claims.exp, i64::MAX);
}

proptest! {
    #[test]
    fn expiry_is_issue_time_plus_ttl(iat in 0i64..4_000_000_000, ttl in 1u64..31_536_000) {
        let claims = Claims::new(1, "alice", iat, Duration::from_secs(ttl));

        prop_assert_eq!(claims.exp - claims.iat, ttl as i64);
        prop_assert!(!claims.is_expired_at(claims.exp - 1));
        prop_assert!(claims.is_expired_at(claims.exp));
    }
}
