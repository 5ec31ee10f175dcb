use super::*;
use crate::clock::ManualClock;
use crate::config::SessionConfig;
use crate::identity::{Identity, Role};
use crate::storage::MemoryStorage;

fn redirect(path: &str) -> Navigation {
    Navigation::Redirect(path.to_owned())
}

fn store() -> SessionStore<MemoryStorage, MemoryStorage, ManualClock> {
    SessionStore::new(
        MemoryStorage::durable(),
        MemoryStorage::session_scoped(),
        ManualClock::at(1_000),
        SessionConfig::default(),
    )
}

// =============================================================================
// decide
// =============================================================================

#[test]
fn admin_path_as_plain_user_goes_home() {
    let guard = RouteGuard::default();
    assert_eq!(guard.decide("/admin", Access::User), redirect("/"));
}

#[test]
fn admin_path_as_admin_proceeds() {
    let guard = RouteGuard::default();
    assert_eq!(guard.decide("/admin", Access::Admin), Navigation::Proceed);
}

#[test]
fn admin_path_anonymous_goes_to_login() {
    let guard = RouteGuard::default();
    assert_eq!(guard.decide("/admin", Access::Anonymous), redirect("/login"));
}

#[test]
fn login_path_when_authenticated_goes_home() {
    let guard = RouteGuard::default();
    assert_eq!(guard.decide("/login", Access::User), redirect("/"));
    assert_eq!(guard.decide("/login", Access::Admin), redirect("/"));
}

#[test]
fn login_path_anonymous_proceeds() {
    let guard = RouteGuard::default();
    assert_eq!(guard.decide("/login", Access::Anonymous), Navigation::Proceed);
}

#[test]
fn private_path_anonymous_goes_to_login() {
    let guard = RouteGuard::default();
    assert_eq!(guard.decide("/dashboard", Access::Anonymous), redirect("/login"));
    assert_eq!(guard.decide("/", Access::Anonymous), redirect("/login"));
}

#[test]
fn private_path_authenticated_proceeds() {
    let guard = RouteGuard::default();
    assert_eq!(guard.decide("/dashboard", Access::User), Navigation::Proceed);
}

#[test]
fn public_paths_anonymous_proceed() {
    let guard = RouteGuard::default();
    assert_eq!(guard.decide("/about", Access::Anonymous), Navigation::Proceed);
    assert_eq!(guard.decide("/register", Access::Anonymous), Navigation::Proceed);
}

#[test]
fn public_register_path_authenticated_proceeds() {
    let guard = RouteGuard::default();
    assert_eq!(guard.decide("/register", Access::User), Navigation::Proceed);
}

#[test]
fn query_and_fragment_are_ignored() {
    let guard = RouteGuard::default();
    assert_eq!(guard.decide("/about?ref=nav", Access::Anonymous), Navigation::Proceed);
    assert_eq!(guard.decide("/admin#users", Access::User), redirect("/"));
    assert_eq!(guard.decide("/login?next=/admin", Access::Admin), redirect("/"));
}

#[test]
fn admin_path_in_allow_list_still_requires_admin() {
    let guard = RouteGuard::new(GuardConfig {
        public_paths: vec!["/login".to_owned(), "/admin".to_owned()],
        ..GuardConfig::default()
    });
    assert_eq!(guard.decide("/admin", Access::Anonymous), redirect("/"));
}

#[test]
fn custom_paths() {
    let guard = RouteGuard::new(GuardConfig {
        login_path: "/signin".to_owned(),
        home_path: "/surveys".to_owned(),
        admin_path: "/manage".to_owned(),
        public_paths: vec!["/signin".to_owned()],
    });
    assert_eq!(guard.decide("/signin", Access::User), redirect("/surveys"));
    assert_eq!(guard.decide("/surveys", Access::Anonymous), redirect("/signin"));
    assert_eq!(guard.decide("/manage", Access::User), redirect("/surveys"));
}

#[test]
fn redirect_target_accessor() {
    assert_eq!(redirect("/login").redirect_target(), Some("/login"));
    assert_eq!(Navigation::Proceed.redirect_target(), None);
}

// =============================================================================
// before_each
// =============================================================================

#[test]
fn before_each_restores_session_before_deciding() {
    let mut writer = store();
    writer.login(Identity::new("alice", Role::User, "t"), false);

    let mut reader = SessionStore::new(
        writer.durable().clone(),
        writer.session_scoped().clone(),
        writer.clock().clone(),
        SessionConfig::default(),
    );
    let guard = RouteGuard::default();

    assert_eq!(guard.before_each("/dashboard", &mut reader), Navigation::Proceed);
    assert!(reader.is_authenticated());
}

#[test]
fn before_each_unauthenticated_private_path() {
    let mut session = store();
    let guard = RouteGuard::default();
    assert_eq!(guard.before_each("/dashboard", &mut session), redirect("/login"));
    assert_eq!(guard.before_each("/about", &mut session), Navigation::Proceed);
}

#[test]
fn before_each_admin_checks() {
    let mut session = store();
    let guard = RouteGuard::default();

    session.login(Identity::new("alice", Role::User, "t"), false);
    assert_eq!(guard.before_each("/admin", &mut session), redirect("/"));
    assert_eq!(guard.before_each("/login", &mut session), redirect("/"));

    session.login(Identity::new("root", Role::Admin, "t"), false);
    assert_eq!(guard.before_each("/admin", &mut session), Navigation::Proceed);
}
