// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use financas::db::{self, SqliteStorage};
use financas::tracker::Tracker;
use financas::{cli, commands};

fn main() -> Result<()> {
    financas::init();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = match matches.get_one::<String>("db") {
        Some(p) => PathBuf::from(p),
        None => db::db_path()?,
    };
    let mut tracker = Tracker::load_state(SqliteStorage::open(&path)?);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", path.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut tracker, sub)?,
        Some(("card", sub)) => commands::cards::handle(&mut tracker, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&tracker, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&tracker, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&tracker)?,
        Some(("reset", sub)) => {
            if commands::confirmed(sub, "erase all transactions and cards") {
                tracker.on_reset_all()?;
                println!("All data erased");
            }
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
