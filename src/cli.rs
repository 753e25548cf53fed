// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("ledgerlite")
        .about("Single-user personal finance ledger")
        .version(clap::crate_version!())
        .subcommand(
            Command::new("init").about("Initialize the store").arg(
                Arg::new("reset")
                    .long("reset")
                    .action(ArgAction::SetTrue)
                    .help("Drop all data and re-seed defaults"),
            ),
        )
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("cash | bank | card"),
                        )
                        .arg(
                            Arg::new("currency")
                                .long("currency")
                                .default_value("USD"),
                        ),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("expense | income"),
                        )
                        .arg(Arg::new("color").long("color").default_value("#3498db"))
                        .arg(
                            Arg::new("parent")
                                .long("parent")
                                .value_parser(clap::value_parser!(i64))
                                .help("Parent category id"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("type").long("type").help("expense | income")),
                ))
                .subcommand(
                    Command::new("set-parent")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(clap::value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("parent")
                                .long("parent")
                                .value_parser(clap::value_parser!(i64))
                                .help("New parent id; omit to clear"),
                        ),
                )
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("expense | income"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("month").long("month"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("offset")
                                .long("offset")
                                .value_parser(clap::value_parser!(usize)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("search").arg(Arg::new("term").required(true)),
                ))
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                )
                .subcommand(
                    Command::new("attach")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(clap::value_parser!(i64)),
                        )
                        .arg(Arg::new("file").long("file").required(true)),
                )
                .subcommand(
                    Command::new("attachments").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Per-category monthly budgets")
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("month").long("month").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .help("Category kind the name refers to"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list").arg(Arg::new("month").long("month")),
                ))
                .subcommand(json_flags(
                    Command::new("report")
                        .arg(Arg::new("month").long("month").required(true)),
                ))
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Monthly dashboard views")
                .subcommand(json_flags(
                    Command::new("summary")
                        .arg(Arg::new("month").long("month"))
                        .arg(
                            Arg::new("prev")
                                .long("prev")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("next")
                                .help("Step back one month from the viewed month"),
                        )
                        .arg(
                            Arg::new("next")
                                .long("next")
                                .action(ArgAction::SetTrue)
                                .help("Step forward one month from the viewed month"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("spend-by-category")
                        .arg(Arg::new("month").long("month").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .help("expense | income"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("daily-net")
                        .arg(Arg::new("month").long("month").required(true)),
                )),
        )
        .subcommand(
            Command::new("import").about("Import data").subcommand(
                Command::new("transactions")
                    .arg(Arg::new("path").long("path").required(true)),
            ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .arg(Arg::new("out").long("out").required(true))
                    .arg(Arg::new("format").long("format").default_value("csv")),
            ),
        )
}
