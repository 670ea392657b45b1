//! The CandidatePool deduplicates community records from multiple sources.
//!
//! Records arrive from several term searches and the popularity fallback;
//! the pool keeps the first record seen per community name so a targeted
//! search hit is never overwritten by a later fallback hit.

use common::CommunityInfo;
use std::collections::HashSet;

/// Deduplicated, insertion-ordered working set of candidate communities.
///
/// Keys are the directory's exact-case names; lookups for reconciliation are
/// case-insensitive. Both operations are total — there are no error states.
#[derive(Debug, Default)]
pub struct CandidatePool {
    entries: Vec<CommunityInfo>,
    seen: HashSet<String>,
}

impl CandidatePool {
    /// Create a new empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `info` keyed by its name, unless an entry with that exact name
    /// already exists. First writer wins; duplicates are silently dropped.
    ///
    /// Returns whether the record was inserted.
    pub fn insert_if_absent(&mut self, info: CommunityInfo) -> bool {
        if self.seen.contains(&info.name) {
            return false;
        }
        self.seen.insert(info.name.clone());
        self.entries.push(info);
        true
    }

    /// Current members in insertion order, as an owned snapshot.
    ///
    /// Further pool mutation does not affect previously returned sequences.
    pub fn values(&self) -> Vec<CommunityInfo> {
        self.entries.clone()
    }

    /// Look up a record by case-insensitive name match.
    ///
    /// A linear scan is fine here: candidate sets are tens of entries.
    pub fn get_case_insensitive(&self, name: &str) -> Option<&CommunityInfo> {
        let wanted = name.to_lowercase();
        self.entries
            .iter()
            .find(|info| info.name.to_lowercase() == wanted)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
