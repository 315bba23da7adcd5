// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print output as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print output as JSON lines")
            .action(ArgAction::SetTrue),
    )
}

fn email_password(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("email")
            .long("email")
            .required(true)
            .help("Account email"),
    )
    .arg(
        Arg::new("password")
            .long("password")
            .required(true)
            .help("Account password"),
    )
}

pub fn build_cli() -> Command {
    Command::new("billfold")
        .about("Personal-finance dashboard client: KPIs, category breakdown, transactions")
        .version(crate_version!())
        .subcommand(email_password(
            Command::new("register").about("Create an account on the backend"),
        ))
        .subcommand(email_password(
            Command::new("login").about("Exchange credentials for a bearer token"),
        ))
        .subcommand(Command::new("logout").about("Discard the stored session"))
        .subcommand(Command::new("whoami").about("Show the signed-in account"))
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("KPIs, income/expense split, category breakdown, recent transactions")
                .arg(
                    Arg::new("recent")
                        .long("recent")
                        .value_parser(value_parser!(usize))
                        .default_value("5")
                        .help("How many recent transactions to list"),
                )
                .arg(
                    Arg::new("max-slices")
                        .long("max-slices")
                        .value_parser(value_parser!(usize))
                        .default_value("8")
                        .help("Explicit category slices before folding into Others"),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .requires("to")
                        .help("KPI window start (YYYY-MM-DD)"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .requires("from")
                        .help("KPI window end (YYYY-MM-DD)"),
                ),
        ))
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("desc").long("desc").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .help("income|expense"),
                        )
                        .arg(
                            Arg::new("category-id")
                                .long("category-id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD; defaults to today"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions")
                        .arg(
                            Arg::new("skip")
                                .long("skip")
                                .value_parser(value_parser!(usize))
                                .default_value("0"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .default_value("100"),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Update fields of a transaction")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("desc").long("desc"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("type").long("type").help("income|expense"))
                        .arg(
                            Arg::new("category-id")
                                .long("category-id")
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD")),
                )
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .about("Create a category")
                        .arg(Arg::new("name").long("name").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List categories"),
                )),
        )
        .subcommand(
            Command::new("config")
                .about("Client configuration")
                .subcommand(
                    Command::new("set-url")
                        .about("Set the backend base URL")
                        .arg(Arg::new("url").long("url").required(true)),
                )
                .subcommand(Command::new("show").about("Show the effective configuration")),
        )
}
