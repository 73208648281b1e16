// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

/// One row of the final report. All four fields are comma-safe strings;
/// serialization order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub description: String,
    pub date: String,
    pub account: String,
    pub amount: String,
}

/// Tallies for the end-of-run summary. Dropped transactions are never
/// surfaced individually, only counted.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ExtractStats {
    pub dropped_paycheck: usize,
    pub dropped_incomplete: usize,
}
