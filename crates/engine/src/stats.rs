use crate::error::EngineError;
use indexmap::IndexMap;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Line totals keyed by extension, kept in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionTotals {
    totals: IndexMap<OsString, usize>,
}

impl ExtensionTotals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `lines` to the total for `key`, inserting the key if it is new.
    pub fn add(&mut self, key: impl AsRef<OsStr>, lines: usize) {
        let key = key.as_ref();
        if let Some(total) = self.totals.get_mut(key) {
            *total += lines;
        } else {
            self.totals.insert(key.to_os_string(), lines);
        }
    }

    #[must_use]
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<usize> {
        self.totals.get(key.as_ref()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, usize)> {
        self.totals.iter().map(|(k, v)| (k.as_os_str(), *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Outcome of one scan: totals plus everything that did not make it in.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub totals: ExtensionTotals,
    /// Files that could not be counted, in walk order.
    pub errors: Vec<(PathBuf, EngineError)>,
    /// Files skipped because their path has no `.`.
    pub skipped: usize,
    /// Files handed to the aggregator.
    pub files: usize,
}
