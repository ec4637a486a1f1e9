// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Identifier types for hypergraph elements and rewrite rules.

/// Canonical 256-bit digest used to compare runs (see [`crate::sequence_digest`]).
pub type Hash = [u8; 32];

/// Identifier of a hypergraph element (atom or expression).
///
/// Values are issued by the hypergraph state from a global, monotonically
/// increasing creation counter, so the derived `Ord` is creation order:
/// a smaller id is an older element.
///
/// # Invariants
/// - An id is never reassigned to a different element.
/// - Ids carry no meaning beyond their relative order.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(u64);

impl ElementId {
    /// Constructs an `ElementId` from its raw creation index.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw creation index.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ElementId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ElementId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Identifier of a rewrite rule.
///
/// The rule registry assigns ids in declaration order, so the derived `Ord`
/// ranks rules declared earlier first.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleId(u32);

impl RuleId {
    /// Constructs a `RuleId` from its declaration index.
    #[must_use]
    pub const fn from_raw(value: u32) -> Self {
        Self(value)
    }

    /// Returns the declaration index.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for RuleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RuleId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
