// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use quick_xml::Reader;
use quick_xml::events::Event;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory scanned for exports when no explicit file is given.
pub const DEFAULT_EXPORT_DIR: &str = "xml";

static EXPORT_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.gnca$").expect("export pattern"));

/// One XML element with its qualified name kept verbatim. GnuCash addresses
/// everything through namespace prefixes (`trn:description`, `split:value`),
/// so paths stay plain strings instead of resolved URIs.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub name: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn first(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first child with the given name.
    pub fn text_of(&self, name: &str) -> Option<&str> {
        self.first(name).map(|c| c.text.as_str())
    }

    /// Every descendant with the given name, depth-first, document order.
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        collect_named(self, name, &mut found);
        found
    }
}

fn collect_named<'a>(el: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
    for child in &el.children {
        if child.name == name {
            found.push(child);
        }
        collect_named(child, name, found);
    }
}

pub fn load(path: &Path) -> Result<Element> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Open export {}", path.display()))?;
    parse(&content).with_context(|| format!("Parse export {}", path.display()))
}

/// Build the whole document as an owned element tree.
pub fn parse(content: &str) -> Result<Element> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    // Sentinel holder at the bottom of the stack collects the root element.
    let mut stack: Vec<Element> = vec![Element::default()];
    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                stack.push(Element {
                    name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
                    ..Element::default()
                });
            }
            Event::Empty(start) => {
                let el = Element {
                    name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
                    ..Element::default()
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(el),
                    None => bail!("Element outside of document"),
                }
            }
            Event::Text(text) => {
                let decoded = text.unescape()?;
                if let Some(el) = stack.last_mut() {
                    el.text.push_str(&decoded);
                }
            }
            Event::CData(data) => {
                let raw = data.into_inner();
                if let Some(el) = stack.last_mut() {
                    el.text.push_str(&String::from_utf8_lossy(&raw));
                }
            }
            Event::End(_) => {
                let el = stack.pop().context("Unbalanced closing tag")?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(el),
                    None => bail!("Unbalanced closing tag"),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let holder = stack.pop().context("Empty document")?;
    if !stack.is_empty() {
        bail!("Unclosed element at end of document");
    }
    holder
        .children
        .into_iter()
        .next()
        .context("No root element in document")
}

/// Newest export in `dir`. Export names are timestamp-prefixed
/// (`20160425_193934_gnucash_export.gnca`), so the lexicographically greatest
/// file name is the newest.
pub fn latest_export(dir: &Path) -> Result<PathBuf> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Read export dir {}", dir.display()))?;
    let mut newest: Option<String> = None;
    for entry in entries {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if !EXPORT_NAME.is_match(&name) {
            continue;
        }
        if newest.as_deref().is_none_or(|n| name.as_str() > n) {
            newest = Some(name);
        }
    }
    let name = newest.with_context(|| format!("No .gnca export found in {}", dir.display()))?;
    Ok(dir.join(name))
}

pub fn resolve_export(file: Option<&str>, dir: &str) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(PathBuf::from(path)),
        None => latest_export(Path::new(dir)),
    }
}
