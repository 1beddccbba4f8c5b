// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{confirmed, date_or_today};
use crate::db::Storage;
use crate::models::{Category, NewTransactionDraft, Transaction, TransactionType};
use crate::tracker::Tracker;
use crate::utils::{
    format_brl, format_day_month, maybe_print_json, parse_amount, parse_date, pretty_table, today,
};
use anyhow::Result;
use serde::Serialize;

pub fn handle<S: Storage>(tracker: &mut Tracker<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(tracker, sub)?,
        Some(("list", sub)) => list(tracker, sub)?,
        Some(("rm", sub)) => remove(tracker, sub)?,
        Some(("toggle", sub)) => toggle(tracker, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: Storage>(tracker: &mut Tracker<S>, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TransactionType = sub.get_one::<String>("type").unwrap().parse()?;
    let description = sub.get_one::<String>("description").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = sub
        .get_one::<String>("date")
        .map(|s| parse_date(s))
        .transpose()?;
    let due_date = sub
        .get_one::<String>("due-date")
        .map(|s| parse_date(s))
        .transpose()?;
    let mut category = sub
        .get_one::<String>("category")
        .map(|s| s.parse::<Category>())
        .transpose()?;
    if kind == TransactionType::Variable && category.is_none() {
        category = Some(Category::default());
    }

    let today = today();
    let draft = NewTransactionDraft {
        r#type: kind.clone(),
        description: description.clone(),
        amount,
        date,
        category,
        due_date,
        card_id: None,
    };
    let id = tracker.on_create_transaction(draft, today)?;
    println!(
        "Recorded {} {} '{}' on {} (id: {})",
        kind,
        format_brl(&amount),
        description.trim(),
        format_day_month(date.unwrap_or(today)),
        id
    );
    Ok(())
}

fn list<S: Storage>(tracker: &Tracker<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(tracker, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.r#type.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.status.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Type", "Description", "Amount", "Category", "Status"],
                rows,
            )
        );
    }
    Ok(())
}

fn remove<S: Storage>(tracker: &mut Tracker<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if !confirmed(sub, &format!("delete transaction '{}'", id)) {
        return Ok(());
    }
    if tracker.on_delete_transaction(id)? {
        println!("Deleted transaction '{}'", id);
    } else {
        println!("No transaction with id '{}'", id);
    }
    Ok(())
}

fn toggle<S: Storage>(tracker: &mut Tracker<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    match tracker.on_toggle_paid(id)? {
        Some(true) => println!("Marked '{}' as paid", id),
        Some(false) => println!("Marked '{}' as open", id),
        None => println!("Nothing to toggle for '{}'", id),
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub description: String,
    pub amount: String,
    pub category: String,
    pub status: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        let status = match (t.r#type.carries_paid(), t.is_paid) {
            (true, true) => "paid",
            (true, false) => "open",
            (false, _) => "",
        };
        TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            r#type: t.r#type.to_string(),
            description: t.description.clone(),
            amount: format!("{:.2}", t.amount),
            category: t.category.map(|c| c.to_string()).unwrap_or_default(),
            status: status.to_string(),
        }
    }
}

/// Rows for the month of `--date`, one type when `--type` is given.
pub fn query_rows<S: Storage>(
    tracker: &Tracker<S>,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let view = tracker.compute_summary(date_or_today(sub)?);
    let wanted = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TransactionType>())
        .transpose()?;
    let lists = [
        (TransactionType::Income, &view.income),
        (TransactionType::Fixed, &view.fixed),
        (TransactionType::Variable, &view.variable),
        (TransactionType::CreditCard, &view.credit_card),
    ];
    let data = lists
        .iter()
        .filter(|(kind, _)| wanted.as_ref().is_none_or(|w| w == kind))
        .flat_map(|(_, list)| list.iter().map(TransactionRow::from))
        .collect();
    Ok(data)
}
