// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Storage;
use crate::tracker::Tracker;
use anyhow::{bail, Context, Result};
use serde_json::json;

pub fn handle<S: Storage>(tracker: &Tracker<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(tracker, sub),
        _ => Ok(()),
    }
}

fn export_transactions<S: Storage>(tracker: &Tracker<S>, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut txs: Vec<_> = tracker.transactions().iter().collect();
    txs.sort_by_key(|t| t.date);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Failed to create {}", out))?;
            wtr.write_record([
                "id",
                "date",
                "type",
                "description",
                "amount",
                "category",
                "is_paid",
                "due_date",
                "card_id",
            ])?;
            for t in txs {
                wtr.write_record([
                    t.id.clone(),
                    t.date.to_string(),
                    t.r#type.to_string(),
                    t.description.clone(),
                    t.amount.to_string(),
                    t.category.map(|c| c.to_string()).unwrap_or_default(),
                    t.is_paid.to_string(),
                    t.due_date.map(|d| d.to_string()).unwrap_or_default(),
                    t.card_id.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = txs
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id, "date": t.date.to_string(), "type": t.r#type.to_string(),
                        "description": t.description, "amount": t.amount.to_string(),
                        "category": t.category.map(|c| c.to_string()), "isPaid": t.is_paid,
                        "dueDate": t.due_date.map(|d| d.to_string()), "cardId": t.card_id
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Failed to write {}", out))?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
