// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use gnubudget::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("report", sub)) => commands::report::handle(sub)?,
        Some(("accounts", sub)) => commands::accounts::handle(sub)?,
        Some(("pretty", sub)) => commands::pretty::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
