//! Tests for the contact store's add, edit and delete contract.
//!
//! These tests validate:
//! - Appends grow the list by one and land at the end
//! - Replacements keep the length and overwrite one position
//! - Rejected calls leave the list untouched
//! - Removals shift later contacts down
//! - Snapshots handed out earlier never change

use contact_list::domain::{Category, Field, ValidationError};
use contact_list::{ContactDraft, ContactStore, StoreError};

fn draft(name: &str, phone: &str, category: &str) -> ContactDraft {
    ContactDraft::new(name, phone, category)
}

fn store_with(names: &[&str]) -> ContactStore {
    let mut store = ContactStore::new();
    for (i, name) in names.iter().enumerate() {
        store
            .upsert(&draft(name, &format!("{}", 100 + i), "Work"), None)
            .unwrap();
    }
    store
}

#[test]
fn test_append_adds_exactly_one_at_the_end() {
    let mut store = store_with(&["Ana", "Bo"]);
    let before = store.len();

    let list = store.upsert(&draft("Cy", "333", "Personal"), None).unwrap();

    assert_eq!(list.len(), before + 1);
    let last = list.get(list.len() - 1).unwrap();
    assert_eq!(last.name, "Cy");
    assert_eq!(last.phone, "333");
    assert_eq!(last.category, Category::Personal);
}

#[test]
fn test_replace_keeps_length_and_sets_position() {
    let mut store = store_with(&["Ana", "Bo", "Cy"]);

    let list = store.upsert(&draft("Bea", "999", "Family"), Some(1)).unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list.names(), vec!["Ana", "Bea", "Cy"]);
    assert_eq!(list.get(1).unwrap().category, Category::Family);
}

#[test]
fn test_empty_fields_are_rejected_without_mutation() {
    let cases = [
        (draft("", "111", "Work"), Field::Name),
        (draft("  ", "111", "Work"), Field::Name),
        (draft("Ana", "", "Work"), Field::Phone),
        (draft("Ana", " \t ", "Work"), Field::Phone),
        (draft("Ana", "111", ""), Field::Category),
    ];

    for (bad, field) in cases {
        let mut store = store_with(&["Bo"]);
        let before = store.snapshot();

        assert_eq!(
            store.upsert(&bad, None).unwrap_err(),
            StoreError::Validation(ValidationError::EmptyField(field))
        );
        assert_eq!(
            store.upsert(&bad, Some(0)).unwrap_err(),
            StoreError::Validation(ValidationError::EmptyField(field))
        );
        assert_eq!(store.snapshot(), before);
    }
}

#[test]
fn test_replace_out_of_bounds_is_rejected() {
    let mut store = store_with(&["Ana"]);
    let before = store.snapshot();

    assert_eq!(
        store.upsert(&draft("Bo", "222", "Work"), Some(1)).unwrap_err(),
        StoreError::Index {
            position: 1,
            len: 1
        }
    );
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_remove_out_of_bounds_is_rejected() {
    let mut store = store_with(&["Ana", "Bo"]);
    let before = store.snapshot();

    assert_eq!(
        store.remove_at(2).unwrap_err(),
        StoreError::Index {
            position: 2,
            len: 2
        }
    );
    assert_eq!(store.snapshot(), before);

    let mut empty = ContactStore::new();
    assert!(matches!(empty.remove_at(0), Err(StoreError::Index { .. })));
}

#[test]
fn test_remove_shifts_later_contacts_down() {
    let mut store = store_with(&["Ana", "Bo", "Cy", "Di"]);

    let (list, removed) = store.remove_at(1).unwrap();

    assert_eq!(removed.name, "Bo");
    assert_eq!(list.len(), 3);
    assert_eq!(list.names(), vec!["Ana", "Cy", "Di"]);
    assert_eq!(store.get(1).unwrap().name, "Cy");
}

#[test]
fn test_get_out_of_bounds() {
    let store = store_with(&["Ana"]);
    assert_eq!(store.get(0).unwrap().name, "Ana");
    assert!(matches!(
        store.get(5),
        Err(StoreError::Index { position: 5, len: 1 })
    ));
}

#[test]
fn test_earlier_snapshots_are_never_mutated() {
    let mut store = store_with(&["Ana"]);
    let held = store.snapshot();

    store.upsert(&draft("Bo", "222", "Work"), None).unwrap();
    store.upsert(&draft("Ann", "111", "Work"), Some(0)).unwrap();
    store.remove_at(1).unwrap();

    assert_eq!(held.names(), vec!["Ana"]);
    assert_eq!(store.snapshot().names(), vec!["Ann"]);
}

#[test]
fn test_add_add_remove_then_rejected_add() {
    let mut store = ContactStore::new();
    assert!(store.is_empty());

    let list = store.upsert(&draft("Ana", "111", "Family"), None).unwrap();
    assert_eq!(list.names(), vec!["Ana"]);

    let list = store.upsert(&draft("Bo", "222", "Work"), None).unwrap();
    assert_eq!(list.names(), vec!["Ana", "Bo"]);

    let (list, _) = store.remove_at(0).unwrap();
    assert_eq!(list.names(), vec!["Bo"]);

    let err = store.upsert(&draft("Cy", "", "Work"), None).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.snapshot().names(), vec!["Bo"]);
}
