//! Contract Test: Uniqueness and Lookup
//!
//! This test verifies the dual-key invariants of the store.
//!
//! Constraints verified:
//! - No two records share an address; no two records share a name
//! - A rejected add changes neither the table nor the file
//! - Lookups and listings never fail for missing keys
//! - Listings match the domain exactly and sort as text
//!
//! If this test fails, the two indexes can disagree.

mod common;

use common::*;
use hostdb_core::Error;

#[test]
fn second_add_with_same_ip_fails() {
    let fixture = Fixture::empty();
    let mut store = fixture.open();

    store
        .add("193.51.25.24".parse().unwrap(), "pikachu.uvsq.fr".parse().unwrap())
        .unwrap();
    let before = fixture.content();

    let err = store
        .add("193.51.25.24".parse().unwrap(), "raichu.uvsq.fr".parse().unwrap())
        .unwrap_err();

    assert!(matches!(err, Error::DuplicateIp(ref ip) if ip.as_str() == "193.51.25.24"));
    assert_eq!(store.len(), 1);
    assert!(
        store
            .lookup_by_name(&"raichu.uvsq.fr".parse().unwrap())
            .is_none()
    );
    assert_eq!(fixture.content(), before);
}

#[test]
fn second_add_with_same_name_fails() {
    let fixture = Fixture::empty();
    let mut store = fixture.open();

    store
        .add("193.51.25.24".parse().unwrap(), "pikachu.uvsq.fr".parse().unwrap())
        .unwrap();

    let err = store
        .add("193.51.25.25".parse().unwrap(), " pikachu.uvsq.fr ".parse().unwrap())
        .unwrap_err();

    assert!(matches!(err, Error::DuplicateName(ref name) if name.as_str() == "pikachu.uvsq.fr"));
    assert_eq!(store.len(), 1);
    assert!(store.lookup_by_ip(&"193.51.25.25".parse().unwrap()).is_none());
}

#[test]
fn loaded_records_count_for_uniqueness() {
    let fixture = Fixture::with_content(UVSQ);
    let mut store = fixture.open();

    assert!(matches!(
        store.add("193.51.31.90".parse().unwrap(), "new.uvsq.fr".parse().unwrap()),
        Err(Error::DuplicateIp(_))
    ));
    assert!(matches!(
        store.add("10.0.0.1".parse().unwrap(), "www.uvsq.fr".parse().unwrap()),
        Err(Error::DuplicateName(_))
    ));
    assert_eq!(store.len(), 3);
}

#[test]
fn lookup_miss_is_not_an_error() {
    let store = Fixture::with_content(UVSQ).open();
    assert!(store.lookup_by_ip(&"1.2.3.4".parse().unwrap()).is_none());
    assert!(
        store
            .lookup_by_name(&"nobody.uvsq.fr".parse().unwrap())
            .is_none()
    );
}

#[test]
fn list_domain_orders() {
    let store = Fixture::with_content(UVSQ).open();

    let hosts: Vec<&str> = store
        .list_domain("uvsq.fr", false)
        .into_iter()
        .map(|record| record.name().host())
        .collect();
    assert_eq!(hosts, ["ecampus", "poste", "www"]);

    // Textual, not numeric: "154" sorts before "90"
    let ips: Vec<&str> = store
        .list_domain("uvsq.fr", true)
        .into_iter()
        .map(|record| record.ip().as_str())
        .collect();
    assert_eq!(ips, ["193.51.25.12", "193.51.31.154", "193.51.31.90"]);
}

#[test]
fn list_domain_matches_exactly() {
    let fixture = Fixture::with_content(
        "www.uvsq.fr 193.51.31.90\n\
         www.cs.uvsq.fr 193.51.32.1\n",
    );
    let store = fixture.open();

    assert_eq!(store.list_domain("uvsq.fr", false).len(), 1);
    assert_eq!(store.list_domain("cs.uvsq.fr", false).len(), 1);
    assert!(store.list_domain("fr", false).is_empty());
    assert!(store.list_domain("nowhere.org", true).is_empty());
}
