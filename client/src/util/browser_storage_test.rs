#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn areas_map_to_session_areas() {
    assert_eq!(BrowserStorage::Local.area(), StorageArea::Durable);
    assert_eq!(BrowserStorage::Session.area(), StorageArea::SessionScoped);
}

#[test]
fn reads_are_empty_without_browser() {
    assert_eq!(BrowserStorage::Local.get_item("user").unwrap(), None);
    assert_eq!(BrowserStorage::Session.get_item("token").unwrap(), None);
}

#[test]
fn writes_are_noops_without_browser() {
    BrowserStorage::Local.set_item("user", "{}").unwrap();
    BrowserStorage::Local.remove_item("user").unwrap();
    assert_eq!(BrowserStorage::Local.get_item("user").unwrap(), None);
}
