//! Sort keys for gallery file names.
//!
//! Customer photos carry an embedded customer number (`vinvel_cus_12.jpg`) and
//! are shown in that numeric order ahead of everything else. All other files
//! follow, ordered by their lowercased name:
//!
//! ```text
//! b.png               →  vinvel_cus_2.png
//! vinvel_cus_10.jpg   →  vinvel_cus_10.jpg
//! vinvel_cus_2.png    →  a.jpg
//! a.jpg               →  b.png
//! ```
//!
//! Galleries without customer numbers (partner logos, for instance) use
//! [`Order::Alphabetical`], where every name takes the second tier.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Prefix that marks a customer photo when no other prefix is configured.
pub const DEFAULT_NUMBERED_PREFIX: &str = "vinvel_cus_";

/// How the files of one manifest are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Numbered customer photos first, then case-insensitive names.
    #[default]
    Numbered,
    /// Case-insensitive names only.
    Alphabetical,
}

/// A customer number of any length, compared by numeric value.
///
/// Kept as its digit string with leading zeros removed, so `007` and `7`
/// compare equal and a 40-digit number still orders correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerNumber(String);

impl CustomerNumber {
    fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        Self(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
    }

    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl Ord for CustomerNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for CustomerNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Two-tier sort key. Variant order is the tier order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Numbered(CustomerNumber),
    Named(String),
}

/// Find the customer number embedded in `name`.
///
/// The first occurrence of `prefix` that is directly followed by an ASCII
/// digit wins, and every consecutive digit after it is taken:
/// - `vinvel_cus_12.jpg` → 12
/// - `team-vinvel_cus_3-final.png` → 3
/// - `vinvel_cus_x-vinvel_cus_5.jpg` → 5
/// - `vinvel_cus_.jpg` → None
pub fn customer_number(name: &str, prefix: &str) -> Option<CustomerNumber> {
    if prefix.is_empty() {
        return None;
    }
    name.char_indices()
        .map(|(pos, _)| pos)
        .filter(|&pos| name[pos..].starts_with(prefix))
        .find_map(|pos| {
            let rest = &name[pos + prefix.len()..];
            let len = rest.bytes().take_while(u8::is_ascii_digit).count();
            (len > 0).then(|| CustomerNumber::from_digits(&rest[..len]))
        })
}

/// Compute the sort key of a single file name.
pub fn sort_key(name: &str, order: Order, prefix: &str) -> SortKey {
    if order == Order::Numbered
        && let Some(number) = customer_number(name, prefix)
    {
        return SortKey::Numbered(number);
    }
    SortKey::Named(name.to_lowercase())
}

/// Sort file names in place. Names with equal keys keep their relative order.
pub fn sort_names(names: &mut [String], order: Order, prefix: &str) {
    names.sort_by_cached_key(|name| sort_key(name, order, prefix));
}
