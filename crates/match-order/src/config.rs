// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Match pool configuration.

/// What [`crate::MatchPool::insert`] does with a match that is content-identical
/// to one already pending.
///
/// Content-identical matches compare equal under the priority relation, so
/// the pool can hold at most one of them either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DuplicatePolicy {
    /// Keep the pending copy and report `Ok(false)`.
    #[default]
    Ignore,
    /// Fail with [`crate::PoolError::DuplicateMatch`].
    Reject,
}

/// Tunables for a [`crate::MatchPool`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PoolConfig {
    /// Upper bound on pending matches; `None` leaves the pool unbounded.
    pub max_pending: Option<usize>,
    /// Handling of content-identical inserts.
    pub duplicates: DuplicatePolicy,
}

impl PoolConfig {
    /// Sets the pending-match limit.
    pub fn with_max_pending(mut self, limit: usize) -> Self {
        self.max_pending = Some(limit);
        self
    }

    /// Sets the duplicate policy.
    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}
