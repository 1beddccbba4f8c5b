// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use financas::db::MemoryStorage;
use financas::models::{CardColor, TransactionType};
use financas::tracker::Tracker;
use financas::{cli, commands::cards};

fn run(t: &mut Tracker<MemoryStorage>, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["financas", "card"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let (_, card_m) = matches.subcommand().unwrap();
    cards::handle(t, card_m)
}

#[test]
fn add_uses_defaults() {
    let mut t = Tracker::load_state(MemoryStorage::new());
    run(&mut t, &["add", "--name", "Nubank"]).unwrap();
    let card = &t.cards()[0];
    assert_eq!(card.due_day, 10);
    assert_eq!(card.color, CardColor::Roxo);
    assert_eq!(card.limit, None);
}

#[test]
fn add_rejects_out_of_range_due_day() {
    let mut t = Tracker::load_state(MemoryStorage::new());
    let err = run(&mut t, &["add", "--name", "Nubank", "--due-day", "40"]).unwrap_err();
    assert!(err.to_string().contains("dueDay"));
    assert!(t.cards().is_empty());
}

#[test]
fn invoice_twice_then_list() {
    let mut t = Tracker::load_state(MemoryStorage::new());
    run(&mut t, &["add", "--name", "Inter", "--due-day", "5", "--color", "laranja", "--limit", "2.500,00"]).unwrap();
    let id = t.cards()[0].id.clone();
    assert_eq!(t.cards()[0].limit, Some("2500".parse().unwrap()));

    run(&mut t, &["invoice", &id, "340", "--date", "2025-03-02"]).unwrap();
    run(&mut t, &["invoice", &id, "400,10", "--date", "2025-03-28"]).unwrap();
    let invoices: Vec<_> = t
        .transactions()
        .iter()
        .filter(|x| x.r#type == TransactionType::CreditCard)
        .collect();
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].description, "Fatura Inter");

    let matches = cli::build_cli().get_matches_from(["financas", "card", "list", "--date", "2025-03-10"]);
    let (_, card_m) = matches.subcommand().unwrap();
    let (_, list_m) = card_m.subcommand().unwrap();
    let rows = cards::query_rows(&t, list_m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].invoice, "400.10");
    assert_eq!(rows[0].status, "open");
    assert_eq!(rows[0].color, "Laranja");
}

#[test]
fn invoice_for_unknown_card_is_rejected() {
    let mut t = Tracker::load_state(MemoryStorage::new());
    assert!(run(&mut t, &["invoice", "ghost", "10"]).is_err());
    assert!(t.transactions().is_empty());
}

#[test]
fn rm_keeps_invoices() {
    let mut t = Tracker::load_state(MemoryStorage::new());
    run(&mut t, &["add", "--name", "Nubank"]).unwrap();
    let id = t.cards()[0].id.clone();
    run(&mut t, &["invoice", &id, "99"]).unwrap();
    run(&mut t, &["rm", &id, "--yes"]).unwrap();
    assert!(t.cards().is_empty());
    assert_eq!(t.transactions().len(), 1);
}
