use survey_session::{Identity, ManualClock, MemoryStorage, Role, SessionConfig};

use super::*;

fn store() -> SessionStore<MemoryStorage, MemoryStorage, ManualClock> {
    SessionStore::new(
        MemoryStorage::durable(),
        MemoryStorage::session_scoped(),
        ManualClock::at(0),
        SessionConfig::default(),
    )
}

#[test]
fn anonymous_private_path_redirects_without_change() {
    let mut session = store();
    let outcome = run_guard(&RouteGuard::default(), "/", &mut session);
    assert_eq!(
        outcome,
        GuardOutcome { session_changed: false, navigation: Navigation::Redirect("/login".to_owned()) }
    );
}

#[test]
fn restored_session_is_reported_as_changed() {
    let mut writer = store();
    writer.login(Identity::new("alice", Role::User, "t"), false);
    let mut session = SessionStore::new(
        writer.durable().clone(),
        writer.session_scoped().clone(),
        writer.clock().clone(),
        SessionConfig::default(),
    );

    let outcome = run_guard(&RouteGuard::default(), "/", &mut session);
    assert!(outcome.session_changed);
    assert_eq!(outcome.navigation, Navigation::Proceed);

    let again = run_guard(&RouteGuard::default(), "/", &mut session);
    assert!(!again.session_changed);
}

#[test]
fn non_admin_on_admin_path_goes_home() {
    let mut session = store();
    session.login(Identity::new("alice", Role::User, "t"), false);
    let outcome = run_guard(&RouteGuard::default(), "/admin", &mut session);
    assert_eq!(outcome.navigation, Navigation::Redirect("/".to_owned()));
}
