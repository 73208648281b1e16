// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use std::fs;
use std::io::Cursor;

/// Fixed destination of the readable copy, overwritten each run.
pub const PRETTY_PATH: &str = "pxml.xml";

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("file_name").unwrap();
    let content = fs::read_to_string(path).with_context(|| format!("Open XML {}", path))?;
    let pretty = indent(&content).with_context(|| format!("Parse XML {}", path))?;
    fs::write(PRETTY_PATH, pretty).with_context(|| format!("Write {}", PRETTY_PATH))?;
    println!("Wrote readable copy of {} to {}", path, PRETTY_PATH);
    Ok(())
}

/// Re-serialize with two-space indentation. Whitespace-only text is dropped
/// so the writer controls the layout.
pub fn indent(content: &str) -> Result<String> {
    let mut reader = Reader::from_str(content);
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Text(text) => {
                if !text.unescape()?.trim().is_empty() {
                    writer.write_event(Event::Text(text))?;
                }
            }
            event => writer.write_event(event)?,
        }
    }
    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).context("Formatted XML is not valid UTF-8")
}
