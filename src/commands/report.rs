// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::document;
use crate::extract::{build_account_index, extract_records};
use crate::filter;
use crate::models::TransactionRecord;
use crate::utils::maybe_print_json;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Fixed destination of the report; a prior run's file is removed first.
pub const OUTPUT_PATH: &str = "output.csv";

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let dir = sub.get_one::<String>("dir").unwrap();
    let path = document::resolve_export(sub.get_one::<String>("file").map(String::as_str), dir)?;

    let root = document::load(&path)?;
    let index = build_account_index(&root)?;
    let (mut records, stats) = extract_records(&root, &index);

    if let Some(month) = sub.get_one::<u32>("month") {
        records = filter::by_month(records, *month)?;
    }
    if let Some(year) = sub.get_one::<i32>("year") {
        records = filter::by_year(records, *year)?;
    }
    if let Some(account) = sub.get_one::<String>("account") {
        records = filter::by_account(records, account, &index)?;
    }

    write_csv(Path::new(OUTPUT_PATH), &records)?;

    if !maybe_print_json(json_flag, jsonl_flag, &records)? {
        println!(
            "Wrote {} records from {} to {} ({} paycheck, {} incomplete skipped)",
            records.len(),
            path.display(),
            OUTPUT_PATH,
            stats.dropped_paycheck,
            stats.dropped_incomplete
        );
    }
    Ok(())
}

/// One comma-joined line per record, no header row. Fields are comma-safe by
/// construction, so the writer never needs to quote.
fn write_csv(out: &Path, records: &[TransactionRecord]) -> Result<()> {
    if out.exists() {
        fs::remove_file(out).with_context(|| format!("Remove prior {}", out.display()))?;
    }
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(out)
        .with_context(|| format!("Open {}", out.display()))?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
