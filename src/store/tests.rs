#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::persist::MemoryStore;

fn draft(amount: &str, date: &str, description: &str, category: &str) -> Draft {
    Draft {
        amount: amount.into(),
        date: date.into(),
        description: description.into(),
        category: category.into(),
    }
}

/// Store plus a second handle onto its backing map, for inspecting what was
/// persisted and for loading a fresh store from the same snapshot.
fn new_store() -> (TransactionStore, MemoryStore) {
    let mem = MemoryStore::new();
    (TransactionStore::new(Box::new(mem.clone())), mem)
}

fn persisted_count(mem: &MemoryStore) -> usize {
    let raw = mem.get("transactions").unwrap().unwrap();
    serde_json::from_str::<Vec<crate::models::Transaction>>(&raw)
        .unwrap()
        .len()
}

// ── Create ────────────────────────────────────────────────────

#[test]
fn test_create_assigns_sequential_ids() {
    let (mut store, _) = new_store();
    let a = store.create(&draft("10", "2024-01-01", "A", "Food")).unwrap();
    let b = store.create(&draft("20", "2024-01-02", "B", "Bills")).unwrap();
    assert_eq!(a, 1);
    assert_eq!(b, 2);
}

#[test]
fn test_create_parses_amount() {
    let (mut store, _) = new_store();
    store
        .create(&draft("12.34", "2024-01-01", "Lunch", "Food"))
        .unwrap();
    assert_eq!(store.transactions()[0].amount, dec!(12.34));
}

#[test]
fn test_create_trims_fields() {
    let (mut store, _) = new_store();
    store
        .create(&draft(" 5 ", " 2024-01-01 ", "  Coffee  ", " food "))
        .unwrap();
    let txn = &store.transactions()[0];
    assert_eq!(txn.amount, dec!(5));
    assert_eq!(txn.date, "2024-01-01");
    assert_eq!(txn.description, "Coffee");
    assert_eq!(txn.category, Category::Food);
}

#[test]
fn test_create_rejects_each_missing_field() {
    let (mut store, _) = new_store();
    let complete = draft("50", "2024-01-01", "Coffee", "Food");

    for wipe in 0..4 {
        let mut d = complete.clone();
        match wipe {
            0 => d.amount.clear(),
            1 => d.date.clear(),
            2 => d.description.clear(),
            _ => d.category.clear(),
        }
        let err = store.create(&d).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)), "field {wipe}");
        assert!(store.transactions().is_empty(), "field {wipe} mutated the list");
    }
}

#[test]
fn test_create_rejects_unparsable_amount() {
    let (mut store, _) = new_store();
    let err = store
        .create(&draft("fifty", "2024-01-01", "Coffee", "Food"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.transactions().is_empty());
}

#[test]
fn test_create_rejects_negative_amount() {
    let (mut store, _) = new_store();
    let err = store
        .create(&draft("-5", "2024-01-01", "Refund", "Food"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[test]
fn test_create_rejects_bad_date() {
    let (mut store, _) = new_store();
    for bad in ["01/15/2024", "2024-13-01", "yesterday", "2024-02-30"] {
        let err = store
            .create(&draft("5", bad, "Coffee", "Food"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)), "{bad}");
    }
}

#[test]
fn test_create_rejects_unknown_category() {
    let (mut store, _) = new_store();
    let err = store
        .create(&draft("5", "2024-01-01", "Coffee", "Groceries"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

// ── Id uniqueness ─────────────────────────────────────────────

#[test]
fn test_ids_unique_after_middle_delete() {
    // The length+1 id policy would hand out id 3 here and collide with the
    // surviving third record. The counter must not.
    let (mut store, _) = new_store();
    for desc in ["A", "B", "C"] {
        store
            .create(&draft("10", "2024-01-01", desc, "Food"))
            .unwrap();
    }
    store.delete(2).unwrap();
    let new_id = store.create(&draft("10", "2024-01-02", "D", "Food")).unwrap();
    assert_eq!(new_id, 4);

    let mut ids: Vec<i64> = store.transactions().iter().map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), store.transactions().len());
}

#[test]
fn test_ids_unique_across_random_churn() {
    let (mut store, _) = new_store();
    for round in 0..20 {
        store
            .create(&draft("1", "2024-01-01", "txn", "Others"))
            .unwrap();
        if round % 3 == 0 {
            let first_id = store.transactions()[0].id;
            store.delete(first_id).unwrap();
        }
        let mut ids: Vec<i64> = store.transactions().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        let len = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), len, "duplicate id after round {round}");
    }
}

// ── Update ────────────────────────────────────────────────────

#[test]
fn test_update_merges_and_preserves_id() {
    let (mut store, _) = new_store();
    let id = store
        .create(&draft("50", "2024-01-01", "Coffee", "Food"))
        .unwrap();

    let mut d = store.begin_edit(id).unwrap();
    d.amount = "99".into();
    store.update(id, &d).unwrap();

    let txn = &store.transactions()[0];
    assert_eq!(txn.id, id);
    assert_eq!(txn.amount, dec!(99));
    assert_eq!(txn.date, "2024-01-01");
    assert_eq!(txn.description, "Coffee");
    assert_eq!(txn.category, Category::Food);
    assert_eq!(store.editing(), None);
}

#[test]
fn test_update_not_found() {
    let (mut store, _) = new_store();
    let err = store
        .update(42, &draft("5", "2024-01-01", "X", "Food"))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(42)));
}

#[test]
fn test_update_validates_before_lookup() {
    let (mut store, _) = new_store();
    let id = store
        .create(&draft("50", "2024-01-01", "Coffee", "Food"))
        .unwrap();
    let err = store.update(id, &Draft::default()).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    // Nothing changed.
    assert_eq!(store.transactions()[0].amount, dec!(50));
}

// ── Delete ────────────────────────────────────────────────────

#[test]
fn test_delete_removes() {
    let (mut store, _) = new_store();
    let id = store
        .create(&draft("50", "2024-01-01", "Coffee", "Food"))
        .unwrap();
    assert!(store.delete(id).unwrap());
    assert!(store.transactions().is_empty());
}

#[test]
fn test_delete_absent_is_noop() {
    let (mut store, _) = new_store();
    store
        .create(&draft("50", "2024-01-01", "Coffee", "Food"))
        .unwrap();
    assert!(!store.delete(999).unwrap());
    assert_eq!(store.transactions().len(), 1);
}

#[test]
fn test_delete_clears_matching_edit_marker() {
    let (mut store, _) = new_store();
    let id = store
        .create(&draft("50", "2024-01-01", "Coffee", "Food"))
        .unwrap();
    store.begin_edit(id).unwrap();
    store.delete(id).unwrap();
    assert_eq!(store.editing(), None);
}

#[test]
fn test_delete_keeps_unrelated_edit_marker() {
    let (mut store, _) = new_store();
    let a = store.create(&draft("1", "2024-01-01", "A", "Food")).unwrap();
    let b = store.create(&draft("2", "2024-01-01", "B", "Food")).unwrap();
    store.begin_edit(a).unwrap();
    store.delete(b).unwrap();
    assert_eq!(store.editing(), Some(a));
}

// ── Begin edit ────────────────────────────────────────────────

#[test]
fn test_begin_edit_returns_matching_draft() {
    let (mut store, _) = new_store();
    let id = store
        .create(&draft("42.50", "2024-03-03", "Taxi", "Transport"))
        .unwrap();
    let d = store.begin_edit(id).unwrap();
    assert_eq!(d.amount, "42.50");
    assert_eq!(d.date, "2024-03-03");
    assert_eq!(d.description, "Taxi");
    assert_eq!(d.category, "Transport");
    assert_eq!(store.editing(), Some(id));
}

#[test]
fn test_begin_edit_not_found() {
    let (mut store, _) = new_store();
    let err = store.begin_edit(7).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(7)));
    assert_eq!(store.editing(), None);
}

#[test]
fn test_cancel_edit() {
    let (mut store, _) = new_store();
    let id = store
        .create(&draft("5", "2024-01-01", "Coffee", "Food"))
        .unwrap();
    store.begin_edit(id).unwrap();
    store.cancel_edit();
    assert_eq!(store.editing(), None);
}

// ── Persistence ───────────────────────────────────────────────

#[test]
fn test_every_mutation_writes_through() {
    let (mut store, mem) = new_store();
    let id = store
        .create(&draft("5", "2024-01-01", "Coffee", "Food"))
        .unwrap();
    assert_eq!(persisted_count(&mem), 1);

    let d = draft("6", "2024-01-01", "Coffee", "Food");
    store.update(id, &d).unwrap();
    assert_eq!(persisted_count(&mem), 1);

    store.delete(id).unwrap();
    // Deleting the last record persists the empty list, so a reload does
    // not resurrect it.
    assert_eq!(persisted_count(&mem), 0);
}

#[test]
fn test_failed_validation_does_not_persist() {
    let (mut store, mem) = new_store();
    store
        .create(&draft("bad", "2024-01-01", "Coffee", "Food"))
        .unwrap_err();
    assert_eq!(mem.get("transactions").unwrap(), None);
}

#[test]
fn test_round_trip() {
    let (mut store, mem) = new_store();
    store
        .create(&draft("50", "2024-01-01", "Coffee", "Food"))
        .unwrap();
    store
        .create(&draft("12.75", "2024-01-05", "Bus ticket", "Transport"))
        .unwrap();

    let mut restored = TransactionStore::new(Box::new(mem.clone()));
    let loaded = restored.load().unwrap();
    assert_eq!(loaded, 2);
    assert_eq!(restored.transactions(), store.transactions());
}

#[test]
fn test_load_reseeds_id_counter() {
    let (mut store, mem) = new_store();
    for desc in ["A", "B", "C"] {
        store
            .create(&draft("1", "2024-01-01", desc, "Food"))
            .unwrap();
    }
    store.delete(1).unwrap();

    let mut restored = TransactionStore::new(Box::new(mem.clone()));
    restored.load().unwrap();
    let id = restored
        .create(&draft("1", "2024-01-02", "D", "Food"))
        .unwrap();
    assert_eq!(id, 4);
}

#[test]
fn test_load_missing_snapshot() {
    let (mut store, _) = new_store();
    assert_eq!(store.load().unwrap(), 0);
    assert!(store.transactions().is_empty());
}

#[test]
fn test_load_malformed_snapshot_falls_back_to_empty() {
    let mut mem = MemoryStore::new();
    mem.set("transactions", "{ definitely not an array").unwrap();

    let mut store = TransactionStore::new(Box::new(mem));
    assert_eq!(store.load().unwrap(), 0);
    assert!(store.transactions().is_empty());

    // And the store stays usable afterwards.
    let id = store
        .create(&draft("5", "2024-01-01", "Coffee", "Food"))
        .unwrap();
    assert_eq!(id, 1);
}

#[test]
fn test_load_rejects_partially_corrupt_snapshot() {
    // One bad record poisons the whole snapshot. Nothing is trusted.
    let mut mem = MemoryStore::new();
    mem.set(
        "transactions",
        r#"[{"id":1,"amount":"5","date":"2024-01-01","description":"OK","category":"Food"},
            {"id":2,"amount":"5","date":"2024-01-01","description":"Bad","category":"Nonsense"}]"#,
    )
    .unwrap();

    let mut store = TransactionStore::new(Box::new(mem));
    assert_eq!(store.load().unwrap(), 0);
    assert!(store.transactions().is_empty());
}

#[test]
fn test_load_accepts_numeric_amounts() {
    let mut mem = MemoryStore::new();
    mem.set(
        "transactions",
        r#"[{"id":1,"amount":25.5,"date":"2024-01-01","description":"Old format","category":"Bills"}]"#,
    )
    .unwrap();

    let mut store = TransactionStore::new(Box::new(mem));
    assert_eq!(store.load().unwrap(), 1);
    assert_eq!(store.transactions()[0].amount, dec!(25.5));
}
