// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Storage;
use crate::models::TransactionType;
use crate::store::RecordStore;
use crate::tracker::Tracker;
use crate::utils::pretty_table;
use anyhow::Result;
use chrono::Datelike;
use std::collections::{HashMap, HashSet};

pub fn handle<S: Storage>(tracker: &Tracker<S>) -> Result<()> {
    let rows = find_issues(tracker.store());
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// One `[issue, detail]` row per problem found in stored data.
pub fn find_issues(store: &RecordStore) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let card_ids: HashSet<&str> = store.cards().iter().map(|c| c.id.as_str()).collect();
    let mut invoices: HashMap<(&str, i32, u32), usize> = HashMap::new();

    for t in store.transactions() {
        match &t.r#type {
            TransactionType::CreditCard => match t.card_id.as_deref() {
                Some(card) => {
                    if !card_ids.contains(card) {
                        rows.push(vec!["orphan_invoice".into(), format!("{} -> {}", t.id, card)]);
                    }
                    *invoices
                        .entry((card, t.date.year(), t.date.month()))
                        .or_default() += 1;
                }
                None => rows.push(vec!["invoice_without_card".into(), t.id.clone()]),
            },
            TransactionType::Variable if t.category.is_none() => {
                rows.push(vec!["variable_without_category".into(), t.id.clone()]);
            }
            TransactionType::Other(kind) => {
                rows.push(vec!["unknown_type".into(), format!("{} ({})", t.id, kind)]);
            }
            _ => {}
        }
        if t.category.is_some() && t.r#type != TransactionType::Variable {
            rows.push(vec!["category_on_non_variable".into(), t.id.clone()]);
        }
        if t.is_paid && !t.r#type.carries_paid() {
            rows.push(vec!["paid_flag_ignored".into(), t.id.clone()]);
        }
        if t.amount.is_sign_negative() && !t.amount.is_zero() {
            rows.push(vec!["negative_amount".into(), t.id.clone()]);
        }
    }

    let mut dupes: Vec<_> = invoices.into_iter().filter(|(_, n)| *n > 1).collect();
    dupes.sort();
    for ((card, year, month), n) in dupes {
        rows.push(vec![
            "duplicate_invoice".into(),
            format!("{} {}-{:02} ({} records)", card, year, month, n),
        ]);
    }
    rows
}
