// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::document::Element;
use crate::models::{ExtractStats, TransactionRecord};
use anyhow::{Context, Result};
use std::collections::HashMap;

/// Transactions whose description contains this marker are income deposits
/// and never appear in the report.
pub const PAYCHECK_MARKER: &str = "Paycheck";

/// The account category retained in the index. Every other category is
/// invisible to later stages, which is what excludes the source leg of a
/// balanced split pair.
pub const EXPENSE_TYPE: &str = "EXPENSE";

/// Expense account id -> display name, built once per run and read-only
/// afterward.
pub type AccountIndex = HashMap<String, String>;

/// What a leaf value means; decides how the normalizer treats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafRole {
    Timestamp,
    Amount,
    AccountRef,
}

/// Typed extraction plan: a leaf reads the text of every matching child, a
/// nested rule recurses into every matching child with its own plan.
#[derive(Debug)]
pub enum FieldRule {
    Leaf {
        path: &'static str,
        role: LeafRole,
    },
    Nested {
        path: &'static str,
        children: &'static [FieldRule],
    },
}

/// The fields a report row needs, addressed the way GnuCash nests them:
/// date-posted wraps the timestamp, splits wrap per-account values.
pub const TRANSACTION_PLAN: &[FieldRule] = &[
    FieldRule::Nested {
        path: "trn:date-posted",
        children: &[FieldRule::Leaf {
            path: "ts:date",
            role: LeafRole::Timestamp,
        }],
    },
    FieldRule::Nested {
        path: "trn:splits",
        children: &[FieldRule::Nested {
            path: "trn:split",
            children: &[
                FieldRule::Leaf {
                    path: "split:value",
                    role: LeafRole::Amount,
                },
                FieldRule::Leaf {
                    path: "split:account",
                    role: LeafRole::AccountRef,
                },
            ],
        }],
    },
];

/// Expected survivor count for a schema-complete row: one timestamp, one
/// amount, one account.
const EXPECTED_FIELDS: usize = 3;

pub fn build_account_index(root: &Element) -> Result<AccountIndex> {
    let mut index = AccountIndex::new();
    for account in root.descendants_named("gnc:account") {
        if account.text_of("act:type") != Some(EXPENSE_TYPE) {
            continue;
        }
        let id = account
            .text_of("act:id")
            .context("Expense account without act:id")?;
        let name = account
            .text_of("act:name")
            .context("Expense account without act:name")?;
        index.insert(id.to_string(), name.to_string());
    }
    Ok(index)
}

/// Walk every transaction in the document and assemble report rows.
///
/// A transaction contributes a row only when its description is free of the
/// paycheck marker and the plan yielded exactly one surviving value per role.
/// Everything else is dropped without comment and only tallied.
pub fn extract_records(
    root: &Element,
    index: &AccountIndex,
) -> (Vec<TransactionRecord>, ExtractStats) {
    let mut records = Vec::new();
    let mut stats = ExtractStats::default();

    for trans in root.descendants_named("gnc:transaction") {
        let description = match trans.text_of("trn:description") {
            Some(d) => d,
            None => {
                stats.dropped_incomplete += 1;
                continue;
            }
        };
        if description.contains(PAYCHECK_MARKER) {
            stats.dropped_paycheck += 1;
            continue;
        }

        let mut found = Vec::new();
        walk_plan(trans, TRANSACTION_PLAN, index, &mut found);

        match assemble(description, &found) {
            Some(record) => records.push(record),
            None => stats.dropped_incomplete += 1,
        }
    }
    (records, stats)
}

/// Interpret an extraction plan against one element, depth-first in document
/// order, pushing each surviving leaf onto `found`.
fn walk_plan(
    el: &Element,
    plan: &[FieldRule],
    index: &AccountIndex,
    found: &mut Vec<(LeafRole, String)>,
) {
    for rule in plan {
        match rule {
            FieldRule::Nested { path, children } => {
                for child in el.children_named(path) {
                    walk_plan(child, children, index, found);
                }
            }
            FieldRule::Leaf { path, role } => {
                for child in el.children_named(path) {
                    if let Some(value) = normalize_leaf(*role, &child.text, index) {
                        found.push((*role, value));
                    }
                }
            }
        }
    }
}

/// Decide whether a leaf value survives and in what shape.
///
/// Account references survive only when the index knows them, which drops
/// the non-expense leg of a balanced pair. Negative-signed amounts are the
/// outflow leg and never survive; the paired positive leg carries the amount
/// the report wants. A value with a leading `/` reads as a formula to
/// spreadsheet imports, so it gets an `=` prefix; a value already starting
/// with `=` passes through untouched.
pub fn normalize_leaf(role: LeafRole, raw: &str, index: &AccountIndex) -> Option<String> {
    match role {
        LeafRole::AccountRef => index.get(raw).cloned(),
        LeafRole::Timestamp => Some(raw.to_string()),
        LeafRole::Amount => {
            if raw.starts_with('-') {
                None
            } else if raw.starts_with('=') {
                Some(raw.to_string())
            } else if raw.starts_with('/') {
                Some(format!("={}", raw))
            } else {
                Some(raw.to_string())
            }
        }
    }
}

fn assemble(description: &str, found: &[(LeafRole, String)]) -> Option<TransactionRecord> {
    if found.len() != EXPECTED_FIELDS {
        return None;
    }
    let mut date = None;
    let mut account = None;
    let mut amount = None;
    for (role, value) in found {
        let slot = match role {
            LeafRole::Timestamp => &mut date,
            LeafRole::AccountRef => &mut account,
            LeafRole::Amount => &mut amount,
        };
        if slot.is_some() {
            return None;
        }
        *slot = Some(value.clone());
    }
    Some(TransactionRecord {
        description: description.to_string(),
        date: date?,
        account: account?,
        amount: amount?,
    })
}
