// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cards;
pub mod doctor;
pub mod exporter;
pub mod summary;
pub mod transactions;

use crate::utils::{parse_date, today};
use anyhow::Result;
use chrono::NaiveDate;

/// `--date` when given, otherwise today.
pub fn date_or_today(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("date") {
        Some(s) => parse_date(s),
        None => Ok(today()),
    }
}

/// Destructive commands only run with `--yes`.
pub fn confirmed(sub: &clap::ArgMatches, what: &str) -> bool {
    if sub.get_flag("yes") {
        return true;
    }
    println!("Refusing to {} without --yes", what);
    false
}
