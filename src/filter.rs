// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::extract::AccountIndex;
use crate::models::TransactionRecord;
use crate::utils::record_date;
use chrono::Datelike;
use thiserror::Error;

/// A filter value that failed validation. The display texts are part of the
/// CLI contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid Month Provided")]
    InvalidMonth(u32),
    #[error("Invalid Year Provided")]
    InvalidYear(i32),
    #[error("Invalid Account Provided")]
    InvalidAccount(String),
}

/// Keep records posted in `month` (1-12). Matches the date field's month
/// component by integer equality, never by substring.
pub fn by_month(
    records: Vec<TransactionRecord>,
    month: u32,
) -> Result<Vec<TransactionRecord>, FilterError> {
    if !(1..=12).contains(&month) {
        return Err(FilterError::InvalidMonth(month));
    }
    Ok(records
        .into_iter()
        .filter(|r| record_date(&r.date).is_some_and(|d| d.month() == month))
        .collect())
}

/// Keep records posted in `year`.
pub fn by_year(
    records: Vec<TransactionRecord>,
    year: i32,
) -> Result<Vec<TransactionRecord>, FilterError> {
    if year <= 0 {
        return Err(FilterError::InvalidYear(year));
    }
    Ok(records
        .into_iter()
        .filter(|r| record_date(&r.date).is_some_and(|d| d.year() == year))
        .collect())
}

/// Keep records for one expense account. The name must exist in the index;
/// an unknown name is a caller error, not an empty result.
pub fn by_account(
    records: Vec<TransactionRecord>,
    name: &str,
    index: &AccountIndex,
) -> Result<Vec<TransactionRecord>, FilterError> {
    if !index.values().any(|n| n == name) {
        return Err(FilterError::InvalidAccount(name.to_string()));
    }
    Ok(records.into_iter().filter(|r| r.account == name).collect())
}
