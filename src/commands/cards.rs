// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{confirmed, date_or_today};
use crate::db::Storage;
use crate::models::{CardColor, NewCardDraft};
use crate::store::InvoiceUpsert;
use crate::tracker::Tracker;
use crate::utils::{format_brl, maybe_print_json, parse_amount, pretty_table};
use anyhow::{bail, Result};
use serde::Serialize;

pub fn handle<S: Storage>(tracker: &mut Tracker<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(tracker, sub)?,
        Some(("list", sub)) => list(tracker, sub)?,
        Some(("rm", sub)) => remove(tracker, sub)?,
        Some(("invoice", sub)) => invoice(tracker, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: Storage>(tracker: &mut Tracker<S>, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let due_day = *sub.get_one::<u32>("due-day").unwrap();
    let color: CardColor = sub.get_one::<String>("color").unwrap().parse()?;
    let limit = sub
        .get_one::<String>("limit")
        .map(|s| parse_amount(s))
        .transpose()?;

    let draft = NewCardDraft {
        name: name.clone(),
        due_day,
        color,
        limit,
    };
    let id = tracker.on_create_card(draft)?;
    println!(
        "Added card '{}' due on day {} ({}, id: {})",
        name.trim(),
        due_day,
        color,
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
                    r.name.clone(),
                    r.due_day.to_string(),
                    r.color.clone(),
                    r.invoice.clone(),
                    r.status.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Card", "Due day", "Color", "Invoice", "Status"], rows)
        );
    }
    Ok(())
}

fn remove<S: Storage>(tracker: &mut Tracker<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if !confirmed(sub, &format!("delete card '{}'", id)) {
        return Ok(());
    }
    if tracker.on_delete_card(id)? {
        println!("Deleted card '{}' (its invoices were kept)", id);
    } else {
        println!("No card with id '{}'", id);
    }
    Ok(())
}

fn invoice<S: Storage>(tracker: &mut Tracker<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = date_or_today(sub)?;
    let Some(card) = tracker.store().card(id) else {
        bail!("Card '{}' not found", id);
    };
    let name = card.name.clone();
    match tracker.on_set_card_invoice(id, amount, date)? {
        InvoiceUpsert::Created(tx) => {
            println!("Invoice for {} set to {} (id: {})", name, format_brl(&amount), tx)
        }
        InvoiceUpsert::Updated(tx) => {
            println!("Invoice for {} updated to {} (id: {})", name, format_brl(&amount), tx)
        }
    }
    Ok(())
}

#[derive(Serialize)]
pub struct CardRow {
    pub id: String,
    pub name: String,
    pub due_day: u32,
    pub color: String,
    pub limit: String,
    pub invoice: String,
    pub invoice_id: String,
    pub status: String,
}

/// Every card with its invoice for the month of `--date`.
pub fn query_rows<S: Storage>(tracker: &Tracker<S>, sub: &clap::ArgMatches) -> Result<Vec<CardRow>> {
    let date = date_or_today(sub)?;
    let data = tracker
        .card_invoices(date)
        .into_iter()
        .map(|ci| CardRow {
            id: ci.card.id.clone(),
            name: ci.card.name.clone(),
            due_day: ci.card.due_day,
            color: ci.card.color.to_string(),
            limit: ci
                .card
                .limit
                .map(|l| format!("{:.2}", l))
                .unwrap_or_default(),
            invoice: ci
                .invoice
                .map(|t| format!("{:.2}", t.amount))
                .unwrap_or_default(),
            invoice_id: ci.invoice.map(|t| t.id.clone()).unwrap_or_default(),
            status: match ci.invoice {
                Some(t) if t.is_paid => "paid".to_string(),
                Some(_) => "open".to_string(),
                None => String::new(),
            },
        })
        .collect();
    Ok(data)
}
