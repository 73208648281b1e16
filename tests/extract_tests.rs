// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use gnubudget::document::{self, Element};
use gnubudget::extract::{
    AccountIndex, LeafRole, build_account_index, extract_records, normalize_leaf,
};
use gnubudget::models::TransactionRecord;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<gnc-v2
     xmlns:gnc="http://www.gnucash.org/XML/gnc"
     xmlns:act="http://www.gnucash.org/XML/act"
     xmlns:trn="http://www.gnucash.org/XML/trn"
     xmlns:ts="http://www.gnucash.org/XML/ts"
     xmlns:split="http://www.gnucash.org/XML/split">
<gnc:book>
  <gnc:account>
    <act:name>Checking</act:name>
    <act:id>1111aaaa</act:id>
    <act:type>BANK</act:type>
  </gnc:account>
  <gnc:account>
    <act:name>Salary</act:name>
    <act:id>2222bbbb</act:id>
    <act:type>INCOME</act:type>
  </gnc:account>
  <gnc:account>
    <act:name>Groceries</act:name>
    <act:id>3333cccc</act:id>
    <act:type>EXPENSE</act:type>
  </gnc:account>
  <gnc:account>
    <act:name>Utilities</act:name>
    <act:id>4444dddd</act:id>
    <act:type>EXPENSE</act:type>
  </gnc:account>
  <gnc:transaction>
    <trn:description>Grocery run</trn:description>
    <trn:date-posted>
      <ts:date>2016-04-20</ts:date>
    </trn:date-posted>
    <trn:splits>
      <trn:split>
        <split:value>-42.50</split:value>
        <split:account>1111aaaa</split:account>
      </trn:split>
      <trn:split>
        <split:value>42.50</split:value>
        <split:account>3333cccc</split:account>
      </trn:split>
    </trn:splits>
  </gnc:transaction>
  <gnc:transaction>
    <trn:description>Paycheck deposit</trn:description>
    <trn:date-posted>
      <ts:date>2016-04-29</ts:date>
    </trn:date-posted>
    <trn:splits>
      <trn:split>
        <split:value>1500.00</split:value>
        <split:account>1111aaaa</split:account>
      </trn:split>
      <trn:split>
        <split:value>-1500.00</split:value>
        <split:account>2222bbbb</split:account>
      </trn:split>
    </trn:splits>
  </gnc:transaction>
  <gnc:transaction>
    <trn:description>Electric bill</trn:description>
    <trn:date-posted>
      <ts:date>2016-05-02 10:59:00 -0500</ts:date>
    </trn:date-posted>
    <trn:splits>
      <trn:split>
        <split:value>-60.00</split:value>
        <split:account>1111aaaa</split:account>
      </trn:split>
      <trn:split>
        <split:value>60.00</split:value>
        <split:account>4444dddd</split:account>
      </trn:split>
    </trn:splits>
  </gnc:transaction>
  <gnc:transaction>
    <trn:description>Savings transfer</trn:description>
    <trn:date-posted>
      <ts:date>2016-05-03</ts:date>
    </trn:date-posted>
    <trn:splits>
      <trn:split>
        <split:value>-200.00</split:value>
        <split:account>1111aaaa</split:account>
      </trn:split>
      <trn:split>
        <split:value>200.00</split:value>
        <split:account>1111aaaa</split:account>
      </trn:split>
    </trn:splits>
  </gnc:transaction>
</gnc:book>
</gnc-v2>
"#;

fn parse(xml: &str) -> Element {
    document::parse(xml).unwrap()
}

#[test]
fn index_keeps_only_expense_accounts() {
    let root = parse(SAMPLE);
    let index = build_account_index(&root).unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.get("3333cccc").map(String::as_str), Some("Groceries"));
    assert_eq!(index.get("4444dddd").map(String::as_str), Some("Utilities"));
    assert!(!index.contains_key("1111aaaa"));
    assert!(!index.contains_key("2222bbbb"));
}

#[test]
fn expense_account_missing_id_fails_fast() {
    let root = parse(
        r#"<gnc-v2><gnc:book><gnc:account>
             <act:name>Orphan</act:name>
             <act:type>EXPENSE</act:type>
           </gnc:account></gnc:book></gnc-v2>"#,
    );
    assert!(build_account_index(&root).is_err());
}

#[test]
fn paycheck_transactions_emit_nothing() {
    let root = parse(SAMPLE);
    let index = build_account_index(&root).unwrap();
    let (records, stats) = extract_records(&root, &index);
    assert!(records.iter().all(|r| !r.description.contains("Paycheck")));
    assert_eq!(stats.dropped_paycheck, 1);
}

#[test]
fn balanced_pair_keeps_positive_leg_only() {
    let root = parse(SAMPLE);
    let index = build_account_index(&root).unwrap();
    let (records, _) = extract_records(&root, &index);
    assert_eq!(
        records[0],
        TransactionRecord {
            description: "Grocery run".to_string(),
            date: "2016-04-20".to_string(),
            account: "Groceries".to_string(),
            amount: "42.50".to_string(),
        }
    );
    assert!(records.iter().all(|r| !r.amount.starts_with('-')));
}

#[test]
fn posting_timestamp_is_carried_verbatim() {
    let root = parse(SAMPLE);
    let index = build_account_index(&root).unwrap();
    let (records, _) = extract_records(&root, &index);
    assert_eq!(records[1].description, "Electric bill");
    assert_eq!(records[1].date, "2016-05-02 10:59:00 -0500");
}

#[test]
fn incomplete_transactions_are_dropped_and_counted() {
    let root = parse(SAMPLE);
    let index = build_account_index(&root).unwrap();
    let (records, stats) = extract_records(&root, &index);
    // Grocery run and Electric bill survive; the transfer has no expense leg.
    assert_eq!(records.len(), 2);
    assert_eq!(stats.dropped_incomplete, 1);
}

#[test]
fn transaction_split_across_two_expense_accounts_is_dropped() {
    let root = parse(
        r#"<gnc-v2><gnc:book>
          <gnc:account>
            <act:name>Groceries</act:name>
            <act:id>g1</act:id>
            <act:type>EXPENSE</act:type>
          </gnc:account>
          <gnc:account>
            <act:name>Utilities</act:name>
            <act:id>u1</act:id>
            <act:type>EXPENSE</act:type>
          </gnc:account>
          <gnc:transaction>
            <trn:description>Supermarket and top-up</trn:description>
            <trn:date-posted><ts:date>2016-06-01</ts:date></trn:date-posted>
            <trn:splits>
              <trn:split><split:value>30.00</split:value><split:account>g1</split:account></trn:split>
              <trn:split><split:value>20.00</split:value><split:account>u1</split:account></trn:split>
            </trn:splits>
          </gnc:transaction>
        </gnc:book></gnc-v2>"#,
    );
    let index = build_account_index(&root).unwrap();
    let (records, stats) = extract_records(&root, &index);
    assert!(records.is_empty());
    assert_eq!(stats.dropped_incomplete, 1);
}

#[test]
fn negative_amounts_never_survive() {
    let index = AccountIndex::new();
    assert_eq!(normalize_leaf(LeafRole::Amount, "-42.50", &index), None);
    assert_eq!(normalize_leaf(LeafRole::Amount, "-1/2", &index), None);
}

#[test]
fn leading_slash_amount_gets_formula_escape() {
    let index = AccountIndex::new();
    assert_eq!(
        normalize_leaf(LeafRole::Amount, "/52", &index),
        Some("=/52".to_string())
    );
    // Plain decimals pass untouched.
    assert_eq!(
        normalize_leaf(LeafRole::Amount, "42.50", &index),
        Some("42.50".to_string())
    );
}

#[test]
fn already_escaped_amount_is_not_escaped_twice() {
    let index = AccountIndex::new();
    assert_eq!(
        normalize_leaf(LeafRole::Amount, "=/52", &index),
        Some("=/52".to_string())
    );
}

#[test]
fn account_ref_outside_index_is_skipped() {
    let mut index = AccountIndex::new();
    index.insert("g1".to_string(), "Groceries".to_string());
    assert_eq!(
        normalize_leaf(LeafRole::AccountRef, "g1", &index),
        Some("Groceries".to_string())
    );
    assert_eq!(normalize_leaf(LeafRole::AccountRef, "b1", &index), None);
}

#[test]
fn timestamps_are_not_filtered_by_account_membership() {
    let index = AccountIndex::new();
    assert_eq!(
        normalize_leaf(LeafRole::Timestamp, "2016-04-20 00:00:00 -0500", &index),
        Some("2016-04-20 00:00:00 -0500".to_string())
    );
}
