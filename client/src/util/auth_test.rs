use super::*;

#[test]
fn hydrating_shows_loading_without_redirect() {
    assert_eq!(guard_outcome(SessionPhase::Hydrating), GuardOutcome::Loading);
    assert!(!should_redirect_unauth(SessionPhase::Hydrating));
}

#[test]
fn anonymous_redirects() {
    assert_eq!(guard_outcome(SessionPhase::Anonymous), GuardOutcome::Redirect);
    assert!(should_redirect_unauth(SessionPhase::Anonymous));
}

#[test]
fn authenticated_renders_wrapped_view() {
    assert_eq!(guard_outcome(SessionPhase::Authenticated), GuardOutcome::Render);
    assert!(!should_redirect_unauth(SessionPhase::Authenticated));
}
