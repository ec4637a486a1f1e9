// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ordered pool of pending matches.
//!
//! Ordering invariant:
//! - Pending matches are kept in ascending priority order (see [`crate::order`]).
//! - [`MatchPool::pop_next`] always yields the minimum, so the sequence of
//!   applied matches depends only on the set of matches inserted, never on the
//!   order in which the matcher discovered them.
//! - A reverse index from element to pending matches makes invalidation
//!   proportional to the matches touching the destroyed element.

use std::collections::BTreeSet;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::candidate::Match;
use crate::config::{DuplicatePolicy, PoolConfig};
use crate::ident::{ElementId, RuleId};
use crate::telemetry::{NullTelemetrySink, TelemetrySink};

/// Errors returned by [`MatchPool`] insertion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// A content-identical match is already pending and duplicates are rejected.
    #[error("match for rule {rule} is already pending")]
    DuplicateMatch {
        /// Rule of the rejected match.
        rule: RuleId,
    },
    /// The pool already holds its configured maximum.
    #[error("match pool is full ({limit} pending)")]
    CapacityExceeded {
        /// Configured `max_pending`.
        limit: usize,
    },
}

/// Live candidate matches, ordered for deterministic application.
///
/// Content-identical matches compare equal and occupy a single slot; see
/// [`DuplicatePolicy`]. Permutations of one binding are distinct entries.
pub struct MatchPool {
    config: PoolConfig,
    pending: BTreeSet<Match>,
    /// Element -> pending matches that bind it.
    by_element: FxHashMap<ElementId, FxHashSet<Match>>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl std::fmt::Debug for MatchPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchPool")
            .field("config", &self.config)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Default for MatchPool {
    fn default() -> Self {
        Self::with_config(PoolConfig::default())
    }
}

impl MatchPool {
    /// Unbounded pool with the default configuration and no telemetry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool with the given configuration and no telemetry.
    pub fn with_config(config: PoolConfig) -> Self {
        Self::with_telemetry(config, Arc::new(NullTelemetrySink))
    }

    /// Pool reporting lifecycle events to `telemetry`.
    pub fn with_telemetry(config: PoolConfig, telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self {
            config,
            pending: BTreeSet::new(),
            by_element: FxHashMap::default(),
            telemetry,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Number of pending matches.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns `true` if a content-identical match is pending.
    pub fn contains(&self, candidate: &Match) -> bool {
        self.pending.contains(candidate)
    }

    /// Adds a newly discovered match.
    ///
    /// Returns `Ok(true)` when the match was added and `Ok(false)` when an
    /// identical match was already pending under [`DuplicatePolicy::Ignore`].
    pub fn insert(&mut self, candidate: Match) -> Result<bool, PoolError> {
        if self.pending.contains(&candidate) {
            return match self.config.duplicates {
                DuplicatePolicy::Ignore => {
                    self.telemetry.on_duplicate(&candidate);
                    Ok(false)
                }
                DuplicatePolicy::Reject => Err(PoolError::DuplicateMatch {
                    rule: candidate.rule(),
                }),
            };
        }
        if let Some(limit) = self.config.max_pending {
            if self.pending.len() >= limit {
                return Err(PoolError::CapacityExceeded { limit });
            }
        }

        for element in candidate.elements() {
            self.by_element
                .entry(*element)
                .or_default()
                .insert(candidate.clone());
        }
        self.pending.insert(candidate.clone());
        self.telemetry.on_inserted(&candidate, self.pending.len());
        Ok(true)
    }

    /// Inserts every match from `candidates`, stopping at the first error.
    ///
    /// Returns how many matches were newly added.
    pub fn insert_all<I>(&mut self, candidates: I) -> Result<usize, PoolError>
    where
        I: IntoIterator<Item = Match>,
    {
        let mut added = 0;
        for candidate in candidates {
            if self.insert(candidate)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Removes a pending match. Returns `false` if it was not pending.
    pub fn remove(&mut self, candidate: &Match) -> bool {
        if !self.pending.remove(candidate) {
            return false;
        }
        self.unindex(candidate);
        true
    }

    /// Next match to apply, without removing it.
    pub fn peek(&self) -> Option<&Match> {
        self.pending.first()
    }

    /// Removes and returns the next match to apply.
    pub fn pop_next(&mut self) -> Option<Match> {
        let next = self.pending.pop_first()?;
        self.unindex(&next);
        self.telemetry.on_selected(&next, self.pending.len());
        Some(next)
    }

    /// Drops every pending match that binds `element`.
    ///
    /// Called when an applied event destroys `element`. The removed matches are
    /// returned in priority order.
    pub fn invalidate(&mut self, element: ElementId) -> Vec<Match> {
        let Some(stale) = self.by_element.remove(&element) else {
            self.telemetry.on_invalidated(element, 0);
            return Vec::new();
        };
        let mut removed: Vec<Match> = stale.into_iter().collect();
        removed.sort_unstable();
        for candidate in &removed {
            self.pending.remove(candidate);
            self.unindex(candidate);
        }
        self.telemetry.on_invalidated(element, removed.len());
        removed
    }

    /// [`MatchPool::invalidate`] for several destroyed elements at once.
    ///
    /// A match binding more than one of them is returned once.
    pub fn invalidate_all(&mut self, elements: &[ElementId]) -> Vec<Match> {
        let mut removed = Vec::new();
        for element in elements {
            removed.extend(self.invalidate(*element));
        }
        removed.sort_unstable();
        removed
    }

    /// Pending matches in application order.
    pub fn iter(&self) -> impl Iterator<Item = &Match> + '_ {
        self.pending.iter()
    }

    /// Removes every pending match.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.by_element.clear();
    }

    fn unindex(&mut self, candidate: &Match) {
        for element in candidate.elements() {
            if let Some(bucket) = self.by_element.get_mut(element) {
                bucket.remove(candidate);
                if bucket.is_empty() {
                    self.by_element.remove(element);
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a MatchPool {
    type Item = &'a Match;
    type IntoIter = std::collections::btree_set::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.pending.iter()
    }
}
