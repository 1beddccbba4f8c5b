// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::date_or_today;
use crate::db::Storage;
use crate::models::FinancialSummary;
use crate::summary::distribution;
use crate::tracker::Tracker;
use crate::utils::{format_brl, maybe_print_json, month_label, pretty_table};
use anyhow::Result;

pub fn handle<S: Storage>(tracker: &Tracker<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let date = date_or_today(sub)?;
    let view = tracker.compute_summary(date);
    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }

    println!("{}", month_label(date));
    println!("{}", pretty_table(&["", "Amount"], summary_rows(&view.summary)));

    let slices = distribution(&view.summary);
    if !slices.is_empty() {
        let rows = slices
            .iter()
            .map(|s| vec![s.label.to_string(), format_brl(&s.value)])
            .collect();
        println!("{}", pretty_table(&["Budget", "Amount"], rows));
    }
    Ok(())
}

pub fn summary_rows(s: &FinancialSummary) -> Vec<Vec<String>> {
    [
        ("Income", s.total_income),
        ("Fixed", s.total_fixed),
        ("Variable", s.total_variable),
        ("Cards", s.total_credit_card),
        ("Total expenses", s.total_expenses),
        ("Balance", s.balance),
        ("Remaining", s.remaining_budget),
    ]
    .into_iter()
    .map(|(label, v)| vec![label.to_string(), format_brl(&v)])
    .collect()
}
