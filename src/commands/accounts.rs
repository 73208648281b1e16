// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::document;
use crate::extract::build_account_index;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let dir = sub.get_one::<String>("dir").unwrap();
    let path = document::resolve_export(sub.get_one::<String>("file").map(String::as_str), dir)?;

    let root = document::load(&path)?;
    let index = build_account_index(&root)?;

    let mut data: Vec<Vec<String>> = index
        .iter()
        .map(|(id, name)| vec![name.clone(), id.clone()])
        .collect();
    data.sort();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Name", "Id"], data));
    }
    Ok(())
}
