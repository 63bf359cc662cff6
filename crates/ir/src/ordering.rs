//! Alphanumeric ordering of pin, peripheral and function names.
//!
//! A name is split into a non-digit prefix, a digit run and a remainder.
//! Prefixes compare lexically, digit runs compare numerically with the
//! larger number first, and ties recurse on the remainder. `PTA10` therefore
//! sorts before `PTA2`, and `FTM3` before `FTM0`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Splits `name` into (non-digit prefix, digit run, remainder).
fn split_name(name: &str) -> (&str, &str, &str) {
    let digits_start = name
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(name.len());
    let (prefix, tail) = name.split_at(digits_start);
    let digits_end = tail
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(tail.len());
    let (digits, rest) = tail.split_at(digits_end);
    (prefix, digits, rest)
}

/// Numeric comparison of two digit runs of arbitrary length.
/// An empty run ranks below every number.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compares two names using the alphanumeric ordering described in the module docs.
///
/// Empty strings sort before non-empty strings; two empty strings are equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let (mut a, mut b) = (a, b);
    loop {
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        let (a_prefix, a_digits, a_rest) = split_name(a);
        let (b_prefix, b_digits, b_rest) = split_name(b);

        let ord = a_prefix
            .cmp(b_prefix)
            // Larger numbers first.
            .then_with(|| compare_digit_runs(b_digits, a_digits));
        if ord != Ordering::Equal {
            return ord;
        }
        // A non-empty name always yields a non-empty prefix or digit run,
        // so the remainders are strictly shorter.
        a = a_rest;
        b = b_rest;
    }
}

/// A name wrapper whose `Ord` follows [`compare_names`].
///
/// Names that the alphanumeric ordering considers equal (for example `A01`
/// and `A1`) fall back to a plain lexical comparison so the order stays
/// total and consistent with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameKey(String);

impl NameKey {
    /// Wraps a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The wrapped name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NameKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for NameKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_names(&self.0, &other.0).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for NameKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
