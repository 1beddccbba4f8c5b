// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn date_arg(help: &'static str) -> Arg {
    Arg::new("date").long("date").value_name("YYYY-MM-DD").help(help)
}

fn confirm_arg() -> Arg {
    Arg::new("yes")
        .long("yes")
        .short('y')
        .action(ArgAction::SetTrue)
        .help("Confirm the deletion")
}

pub fn build_cli() -> Command {
    Command::new("financas")
        .version(crate_version!())
        .about("Monthly personal finance tracker: income, bills, daily expenses and card invoices")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("Database file (defaults to $FINANCAS_DB or the platform data dir)"),
        )
        .subcommand(Command::new("init").about("Create the database and print its location"))
        .subcommand(
            Command::new("tx")
                .about("Income, fixed bills and variable expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_parser(["income", "fixed", "variable"]),
                        )
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(date_arg("Transaction date (default: today)"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Required for variable expenses (Alimentação, Transporte, ...)"),
                        )
                        .arg(
                            Arg::new("due-date")
                                .long("due-date")
                                .value_name("YYYY-MM-DD")
                                .help("Due date of a fixed bill"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List the month's transactions")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "fixed", "variable", "credit_card"]),
                        )
                        .arg(date_arg("Any day of the month to list (default: today)")),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true))
                        .arg(confirm_arg()),
                )
                .subcommand(
                    Command::new("toggle")
                        .about("Flip the paid flag of a bill or invoice")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("card")
                .about("Credit cards and their monthly invoices")
                .subcommand(
                    Command::new("add")
                        .about("Register a card")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("due-day")
                                .long("due-day")
                                .value_parser(clap::value_parser!(u32))
                                .default_value("10"),
                        )
                        .arg(Arg::new("color").long("color").default_value("Roxo"))
                        .arg(Arg::new("limit").long("limit")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List cards with the month's invoice")
                        .arg(date_arg("Any day of the month to show (default: today)")),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a card (its invoices are kept)")
                        .arg(Arg::new("id").required(true))
                        .arg(confirm_arg()),
                )
                .subcommand(
                    Command::new("invoice")
                        .about("Set this month's invoice amount for a card")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("amount").required(true))
                        .arg(date_arg("Reference day (default: today)")),
                ),
        )
        .subcommand(json_flags(
            Command::new("summary")
                .about("Totals and balance for a month")
                .arg(date_arg("Any day of the month to summarize (default: today)")),
        ))
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .arg(Arg::new("format").long("format").required(true))
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for inconsistencies"))
        .subcommand(
            Command::new("reset")
                .about("Erase all transactions and cards")
                .arg(confirm_arg()),
        )
}
