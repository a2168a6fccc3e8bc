//! Per-field cleanup
//!
//! Fields are trimmed, then every money-like span (`$1,234`, `1,000,000`)
//! loses its currency sign and thousands separators. Commas outside those
//! spans are kept, so `Smith, John` passes through unchanged.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // Optional dollar sign followed by digit groups, each optionally
    // trailed by a comma. Capture 1 excludes the dollar sign.
    static ref MONEY_PATTERN: Regex = Regex::new(r"(?m)\$?((?:\d+,?)+)").unwrap();
}

/// Strip the `$` and commas from every money-like span in `value`.
pub fn unmoney(value: &str) -> String {
    MONEY_PATTERN
        .replace_all(value, |caps: &Captures| caps[1].replace(',', ""))
        .into_owned()
}

/// Clean one field: trim surrounding whitespace, then [`unmoney`] it.
pub fn cleanup_field(field: &str) -> String {
    unmoney(field.trim())
}

/// Clean every field of a record, keeping field order and count.
pub fn clean_record(record: &csv::StringRecord) -> csv::StringRecord {
    record.iter().map(cleanup_field).collect()
}
