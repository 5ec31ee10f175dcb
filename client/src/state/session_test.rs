use survey_session::{Identity, Persistence, Role};

use super::*;

#[test]
fn build_env_ignores_unknown_keys() {
    assert_eq!(build_env("PATH"), None);
}

#[test]
fn new_session_is_anonymous() {
    let session = new_app_session();
    assert!(!session.is_authenticated());
    assert_eq!(session.persistence(), Persistence::None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn login_and_logout_without_browser_stay_total() {
    let mut session = new_app_session();
    session.login(Identity::new("alice", Role::Admin, "t"), true);
    assert!(session.is_admin());
    assert!(session.expires_at().is_some());

    session.logout();
    assert!(!session.is_authenticated());

    // Nothing was persisted, so a restore finds nothing.
    session.initialize();
    assert!(!session.is_authenticated());
}
