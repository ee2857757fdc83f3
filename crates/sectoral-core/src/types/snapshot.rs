//! Period snapshots of sector values.

use crate::registry::{is_reserved_code, NON_OIL_TOTAL_CODE, TOTAL_CODE};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sector values for a single period, keyed by sector code.
///
/// Besides individual sectors a snapshot may carry the reserved aggregate
/// codes (`_T`, `_TNO`, `NFC`). Those are never iterated as sectors; they are
/// read through [`Snapshot::total`] and [`Snapshot::non_oil_total`].
///
/// Codes are kept in a `BTreeMap` so iteration order is stable.
///
/// # Examples
///
/// ```
/// use sectoral_core::types::Snapshot;
/// use rust_decimal_macros::dec;
///
/// let snapshot = Snapshot::new()
///     .with_value("A", dec!(100))
///     .with_value("B", dec!(300))
///     .with_value("_T", dec!(400));
///
/// assert_eq!(snapshot.total(), Some(dec!(400)));
/// assert_eq!(snapshot.sector_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    values: BTreeMap<String, Decimal>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a value.
    #[must_use]
    pub fn with_value(mut self, code: impl Into<String>, value: Decimal) -> Self {
        self.values.insert(code.into(), value);
        self
    }

    /// Inserts a value, returning the previous one for that code.
    pub fn insert(&mut self, code: impl Into<String>, value: Decimal) -> Option<Decimal> {
        self.values.insert(code.into(), value)
    }

    /// Returns the value recorded for `code`, reserved codes included.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.values.get(code).copied()
    }

    /// Returns true if the snapshot carries `code`.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.values.contains_key(code)
    }

    /// The reserved total (`_T`), if present.
    #[must_use]
    pub fn total(&self) -> Option<Decimal> {
        self.get(TOTAL_CODE)
    }

    /// The reserved non-oil total (`_TNO`), if present.
    #[must_use]
    pub fn non_oil_total(&self) -> Option<Decimal> {
        self.get(NON_OIL_TOTAL_CODE)
    }

    /// Iterates non-aggregate sectors in code order.
    pub fn sectors(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.values
            .iter()
            .filter(|(code, _)| !is_reserved_code(code))
            .map(|(code, value)| (code.as_str(), *value))
    }

    /// Number of non-aggregate sectors.
    #[must_use]
    pub fn sector_count(&self) -> usize {
        self.sectors().count()
    }

    /// Returns true if no codes at all are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Decimal)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (K, Decimal)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
