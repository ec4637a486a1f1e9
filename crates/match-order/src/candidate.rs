// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Candidate rule matches.
use thiserror::Error;

use crate::ident::{ElementId, RuleId};

/// Errors raised while constructing a [`Match`] against a known pattern arity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The rule has pattern slots but the binding is empty.
    #[error("rule {rule} has pattern slots but the binding is empty")]
    EmptyBinding {
        /// Rule that produced the binding.
        rule: RuleId,
    },
    /// The binding length differs from the rule's pattern arity.
    #[error("rule {rule} expects {expected} bound elements, got {actual}")]
    ArityMismatch {
        /// Rule that produced the binding.
        rule: RuleId,
        /// Pattern arity declared by the rule.
        expected: usize,
        /// Number of elements actually bound.
        actual: usize,
    },
}

/// A candidate rule application: a rule plus the elements bound to its pattern.
///
/// `elements` keeps the matcher's binding order (slot `i` of the pattern is
/// bound to `elements[i]`); it is not sorted. The same element may appear
/// more than once when the rule lets one element fill several slots.
///
/// Equality and hashing are content-based (same rule, same ordered binding)
/// and agree with the priority order implemented in [`crate::order`].
///
/// # Invariants
/// - Immutable once built; the priority relation only reads it.
/// - `elements` is non-empty whenever the rule has at least one pattern slot.
///   [`Match::new`] trusts the caller; [`Match::checked`] enforces it.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    rule: RuleId,
    elements: Box<[ElementId]>,
}

impl Match {
    /// Builds a match without validating the binding against the rule's arity.
    pub fn new(rule: RuleId, elements: impl Into<Box<[ElementId]>>) -> Self {
        Self {
            rule,
            elements: elements.into(),
        }
    }

    /// Builds a match and checks the binding length against `arity`.
    pub fn checked(
        rule: RuleId,
        elements: impl Into<Box<[ElementId]>>,
        arity: usize,
    ) -> Result<Self, MatchError> {
        let elements = elements.into();
        if arity > 0 && elements.is_empty() {
            return Err(MatchError::EmptyBinding { rule });
        }
        if elements.len() != arity {
            return Err(MatchError::ArityMismatch {
                rule,
                expected: arity,
                actual: elements.len(),
            });
        }
        Ok(Self { rule, elements })
    }

    /// Rule this match would apply.
    #[must_use]
    pub fn rule(&self) -> RuleId {
        self.rule
    }

    /// Bound elements in binding order.
    #[must_use]
    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    /// Number of bound elements.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if `element` fills any slot of this match.
    #[must_use]
    pub fn references(&self, element: ElementId) -> bool {
        self.elements.contains(&element)
    }

    /// Newest (largest) bound element, if any.
    #[must_use]
    pub fn newest(&self) -> Option<ElementId> {
        self.elements.iter().copied().max()
    }
}
