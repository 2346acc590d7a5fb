// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use expense_tracker::{ExpenseError, ExpenseStore, cli, commands::expenses, utils::today};
use std::fs;
use tempfile::{TempDir, tempdir};

fn setup() -> (TempDir, ExpenseStore) {
    let dir = tempdir().unwrap();
    let store = ExpenseStore::open_or_init(dir.path()).unwrap();
    (dir, store)
}

fn run(store: &ExpenseStore, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["expense-tracker"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("add", sub)) => expenses::add(store, sub),
        Some(("list", sub)) => expenses::list(store, sub),
        Some(("delete", sub)) => expenses::delete(store, sub),
        Some(("update", sub)) => expenses::update(store, sub),
        other => panic!("unexpected command {:?}", other.map(|(name, _)| name)),
    }
}

fn seed(store: &ExpenseStore) {
    run(store, &["add", "--description", "Lunch", "--amount", "20"]).unwrap();
    run(store, &["add", "--description", "Taxi", "--amount", "12.50"]).unwrap();
    run(store, &["add", "--description", "Books", "--amount", "40"]).unwrap();
}

#[test]
fn add_on_empty_store_creates_first_expense() {
    let (_dir, store) = setup();
    run(&store, &["add", "--description", "Lunch", "--amount", "20"]).unwrap();

    let ledger = store.load().unwrap();
    assert_eq!(ledger.len(), 1);
    let e = ledger.get(1).unwrap();
    assert_eq!(e.description, "Lunch");
    assert_eq!(format!("{:.2}", e.amount), "20.00");
    assert_eq!(e.date, today());
}

#[test]
fn add_rejects_unparseable_amount_and_keeps_store() {
    let (_dir, store) = setup();
    seed(&store);
    let before = fs::read(store.path()).unwrap();

    let err = run(&store, &["add", "-d", "Dinner", "-a", "twelve"]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ExpenseError>(),
        Some(ExpenseError::InvalidAmount(_))
    ));
    assert_eq!(fs::read(store.path()).unwrap(), before);
}

#[test]
fn delete_renumbers_remaining_expenses() {
    let (_dir, store) = setup();
    seed(&store);
    run(&store, &["delete", "--id", "1"]).unwrap();

    let ledger = store.load().unwrap();
    let rows: Vec<(u32, &str)> = ledger
        .iter()
        .map(|e| (e.id, e.description.as_str()))
        .collect();
    assert_eq!(rows, vec![(1, "Taxi"), (2, "Books")]);

    run(&store, &["add", "-d", "Coffee", "-a", "3"]).unwrap();
    let ids: Vec<u32> = store.load().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn delete_unknown_id_reports_not_found() {
    let (_dir, store) = setup();
    seed(&store);
    let before = fs::read(store.path()).unwrap();

    let err = run(&store, &["delete", "--id", "9"]).unwrap_err();
    assert_eq!(err.to_string(), "Expense with ID 9 not found");
    assert_eq!(fs::read(store.path()).unwrap(), before);
}

#[test]
fn deleting_only_expense_empties_store() {
    let (_dir, store) = setup();
    run(&store, &["add", "-d", "Lunch", "-a", "20"]).unwrap();
    run(&store, &["delete", "--id", "1"]).unwrap();
    assert!(store.load().unwrap().is_empty());
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
}

#[test]
fn update_amount_only_keeps_description() {
    let (_dir, store) = setup();
    seed(&store);
    run(&store, &["update", "--id", "2", "--amount", "15.50"]).unwrap();

    let ledger = store.load().unwrap();
    let e = ledger.get(2).unwrap();
    assert_eq!(e.description, "Taxi");
    assert_eq!(e.amount, 15.5);
    assert_eq!(e.date, today());
    assert_eq!(ledger.get(1).unwrap().amount, 20.0);
}

#[test]
fn update_description_only_keeps_amount() {
    let (_dir, store) = setup();
    seed(&store);
    run(&store, &["update", "--id", "3", "--description", "Textbooks"]).unwrap();

    let ledger = store.load().unwrap();
    let e = ledger.get(3).unwrap();
    assert_eq!(e.description, "Textbooks");
    assert_eq!(e.amount, 40.0);
}

#[test]
fn update_unknown_id_or_bad_amount_changes_nothing() {
    let (_dir, store) = setup();
    seed(&store);
    let before = fs::read(store.path()).unwrap();

    let err = run(&store, &["update", "--id", "4", "-d", "Ghost"]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ExpenseError>(),
        Some(ExpenseError::NotFound(4))
    ));
    let err = run(&store, &["update", "--id", "1", "-d", "Brunch", "-a", "1,5"]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ExpenseError>(),
        Some(ExpenseError::InvalidAmount(_))
    ));
    assert_eq!(fs::read(store.path()).unwrap(), before);
}

#[test]
fn list_does_not_modify_store() {
    let (_dir, store) = setup();
    run(&store, &["list"]).unwrap();
    seed(&store);
    let before = fs::read(store.path()).unwrap();
    run(&store, &["list"]).unwrap();
    run(&store, &["list", "--jsonl"]).unwrap();
    assert_eq!(fs::read(store.path()).unwrap(), before);
}
