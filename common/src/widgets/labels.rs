//! Fixed-capacity label formatting.
//!
//! Labels with a number in them are formatted into fixed-capacity
//! `heapless::String`s; capacities are sized for the longest possible value.

use core::fmt::Write;

use chrono::NaiveDate;
use heapless::String;

use crate::config::DATE_FORMAT;

/// Capacity of numeric labels. Longest is the tally line with a `u64::MAX` count.
pub const LABEL_LEN: usize = 48;

/// Capacity of the date line ("Wednesday, September 30, 2026" is 29 chars).
pub const DATE_LEN: usize = 40;

/// "Weekly Completed Tasks: {count}".
pub fn tally_label(count: u64) -> String<LABEL_LEN> {
    let mut label = String::new();
    let _ = write!(label, "Weekly Completed Tasks: {count}");
    label
}

/// "Completed - {count}".
pub fn completed_label(count: usize) -> String<LABEL_LEN> {
    let mut label = String::new();
    let _ = write!(label, "Completed - {count}");
    label
}

/// Long date line, e.g. "Monday, March 03, 2025".
pub fn date_label(date: NaiveDate) -> String<DATE_LEN> {
    let mut label = String::new();
    let _ = write!(label, "{}", date.format(DATE_FORMAT));
    label
}
