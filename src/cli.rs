// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

use crate::document::DEFAULT_EXPORT_DIR;

pub fn build_cli() -> Command {
    Command::new("gnubudget")
        .about("GnuCash XML exports to spreadsheet-ready expense CSV")
        .version(clap::crate_version!())
        .subcommand(
            Command::new("report")
                .about("Extract expense transactions into output.csv")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .help("Explicit export file (defaults to the newest export in --dir)"),
                )
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .default_value(DEFAULT_EXPORT_DIR)
                        .help("Directory scanned for .gnca exports"),
                )
                .arg(
                    Arg::new("month")
                        .short('m')
                        .long("month")
                        .value_parser(value_parser!(u32))
                        .allow_negative_numbers(true)
                        .help("Limit to one month (1-12). Ex. -m 4"),
                )
                .arg(
                    Arg::new("year")
                        .short('y')
                        .long("year")
                        .value_parser(value_parser!(i32))
                        .allow_negative_numbers(true)
                        .help("Limit to one year. Ex. -y 2016"),
                )
                .arg(
                    Arg::new("account")
                        .short('a')
                        .long("account")
                        .help("Limit to one expense account (quote names with spaces)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Also print surviving records as JSON"),
                )
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .help("Also print surviving records as JSON lines"),
                ),
        )
        .subcommand(
            Command::new("accounts")
                .about("List the expense accounts found in an export")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .help("Explicit export file (defaults to the newest export in --dir)"),
                )
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .default_value(DEFAULT_EXPORT_DIR)
                        .help("Directory scanned for .gnca exports"),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("pretty")
                .about("Rewrite an XML file with indentation so it can be read by a human")
                .arg(
                    Arg::new("file_name")
                        .short('f')
                        .long("file_name")
                        .required(true)
                        .help("Path to the XML file. Ex. -f ../xml/example.gnca"),
                ),
        )
}
