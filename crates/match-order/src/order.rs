// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Match priority relation.
//!
//! # Ordering
//!
//! Two matches are ranked by a four-stage lexicographic cascade; a later stage
//! is consulted only when every earlier stage ties:
//!
//! 1. [`PriorityStage::NewestElement`]: bindings sorted newest-first, compared
//!    element-wise. Favours matches whose newest participant is as old as
//!    possible, so evaluation proceeds oldest-first.
//! 2. [`PriorityStage::OldestElement`]: bindings sorted oldest-first, compared
//!    element-wise.
//! 3. [`PriorityStage::Rule`]: the rule declared first wins.
//! 4. [`PriorityStage::Binding`]: raw binding order as produced by the matcher.
//!
//! Every sequence comparison uses the same primitive: the first differing
//! index decides (smaller element first); if one sequence is a prefix of the
//! other, the shorter one sorts first; identical sequences tie.
//!
//! A stage 1 tie means both bindings hold the same multiset, so stage 2 ties
//! as well whenever it is reached.
//!
//! The cascade reads only element creation order and rule declaration order,
//! so the rank of a match never depends on when or where the matcher found it.
//! It ties only for the same rule with the identical ordered binding, which
//! is exactly content equality on [`Match`].

use core::cmp::Ordering;

use crate::candidate::Match;
use crate::ident::ElementId;

/// Largest arity sorted in a stack buffer; longer bindings spill to the heap.
pub const INLINE_ARITY: usize = 8;

/// Stage of the cascade that separated two matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PriorityStage {
    /// Bindings compared newest participant first.
    NewestElement,
    /// Bindings compared oldest participant first.
    OldestElement,
    /// Rule declaration order.
    Rule,
    /// Raw binding order.
    Binding,
}

/// Outcome of [`decide`]: the ordering and the stage that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityDecision {
    /// Relative rank of the left match against the right one.
    pub ordering: Ordering,
    /// Deciding stage, or `None` when the matches are equal.
    pub stage: Option<PriorityStage>,
}

impl PriorityDecision {
    const EQUAL: Self = Self {
        ordering: Ordering::Equal,
        stage: None,
    };

    #[inline]
    fn at(stage: PriorityStage, ordering: Ordering) -> Option<Self> {
        (ordering != Ordering::Equal).then_some(Self {
            ordering,
            stage: Some(stage),
        })
    }
}

/// Ascending copy of a binding, kept on the stack for small arities.
enum SortedBinding {
    Inline {
        ids: [ElementId; INLINE_ARITY],
        len: usize,
    },
    Spilled(Vec<ElementId>),
}

impl SortedBinding {
    fn of(elements: &[ElementId]) -> Self {
        let len = elements.len();
        if len <= INLINE_ARITY {
            let mut ids = [ElementId::default(); INLINE_ARITY];
            ids[..len].copy_from_slice(elements);
            ids[..len].sort_unstable();
            Self::Inline { ids, len }
        } else {
            let mut ids = elements.to_vec();
            ids.sort_unstable();
            Self::Spilled(ids)
        }
    }

    #[inline]
    fn as_slice(&self) -> &[ElementId] {
        match self {
            Self::Inline { ids, len } => &ids[..*len],
            Self::Spilled(ids) => ids,
        }
    }
}

/// Runs the cascade and reports which stage decided.
pub fn decide(a: &Match, b: &Match) -> PriorityDecision {
    let lhs = SortedBinding::of(a.elements());
    let rhs = SortedBinding::of(b.elements());
    let (lhs, rhs) = (lhs.as_slice(), rhs.as_slice());

    // Descending order is the ascending copy read back to front.
    PriorityDecision::at(
        PriorityStage::NewestElement,
        lhs.iter().rev().cmp(rhs.iter().rev()),
    )
    .or_else(|| PriorityDecision::at(PriorityStage::OldestElement, lhs.cmp(rhs)))
    .or_else(|| PriorityDecision::at(PriorityStage::Rule, a.rule().cmp(&b.rule())))
    .or_else(|| {
        PriorityDecision::at(PriorityStage::Binding, a.elements().cmp(b.elements()))
    })
    .unwrap_or(PriorityDecision::EQUAL)
}

/// Three-way priority comparison: `Less` means `a` is applied before `b`.
#[inline]
pub fn compare(a: &Match, b: &Match) -> Ordering {
    decide(a, b).ordering
}

/// Strict "applied before" predicate built from the same cascade as [`compare`].
#[inline]
pub fn precedes(a: &Match, b: &Match) -> bool {
    compare(a, b) == Ordering::Less
}

/// Sorts a batch of matches into application order.
pub fn sort_matches(matches: &mut [Match]) {
    matches.sort_by(compare);
}

impl PartialOrd for Match {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Match {
    /// Priority order; see the [module docs](self).
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::RuleId;

    fn m(rule: u32, raw: &[u64]) -> Match {
        Match::new(
            RuleId::from_raw(rule),
            raw.iter()
                .copied()
                .map(ElementId::from_raw)
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn newest_participant_decides_first() {
        let a = m(0, &[5, 2]);
        let b = m(0, &[5, 3]);
        let d = decide(&a, &b);
        assert_eq!(d.ordering, Ordering::Less);
        assert_eq!(d.stage, Some(PriorityStage::NewestElement));
    }

    #[test]
    fn rule_breaks_tie_between_same_element_sets() {
        let a = m(1, &[1, 2]);
        let b = m(0, &[2, 1]);
        let d = decide(&a, &b);
        assert_eq!(d.ordering, Ordering::Greater);
        assert_eq!(d.stage, Some(PriorityStage::Rule));
    }

    #[test]
    fn binding_order_breaks_permutation_tie() {
        let a = m(0, &[1, 2]);
        let b = m(0, &[2, 1]);
        let d = decide(&a, &b);
        assert_eq!(d.ordering, Ordering::Less);
        assert_eq!(d.stage, Some(PriorityStage::Binding));
    }

    #[test]
    fn shorter_binding_wins_common_prefix_regardless_of_rule() {
        let a = m(5, &[3]);
        let b = m(0, &[3, 1]);
        let d = decide(&a, &b);
        assert_eq!(d.ordering, Ordering::Less);
        assert_eq!(d.stage, Some(PriorityStage::NewestElement));
    }

    #[test]
    fn oldest_stage_ties_whenever_newest_stage_ties() {
        // A newest-first tie means both bindings hold the same multiset.
        let a = m(0, &[2, 7, 2]);
        let b = m(1, &[7, 2, 2]);
        assert_eq!(decide(&a, &b).stage, Some(PriorityStage::Rule));

        let c = m(0, &[7, 1, 4]);
        let d = m(0, &[4, 7, 2]);
        assert_eq!(decide(&c, &d).stage, Some(PriorityStage::NewestElement));
        assert_eq!(compare(&c, &d), Ordering::Less);
    }

    #[test]
    fn identical_matches_are_equal() {
        let a = m(3, &[9, 4, 4]);
        let b = m(3, &[9, 4, 4]);
        assert_eq!(decide(&a, &b), PriorityDecision::EQUAL);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert!(!precedes(&a, &b));
        assert!(!precedes(&a, &a));
    }

    #[test]
    fn spilled_bindings_sort_like_inline_ones() {
        let long: Vec<u64> = (0..(INLINE_ARITY as u64 + 4)).rev().collect();
        let mut longer = long.clone();
        longer.push(0);
        let a = m(0, &long);
        let b = m(0, &longer);
        // Same newest-first prefix; `a` is shorter.
        assert!(precedes(&a, &b));
        assert!(!precedes(&b, &a));
    }

    #[test]
    fn empty_binding_sorts_before_any_nonempty_binding() {
        let empty = m(9, &[]);
        let one = m(0, &[0]);
        assert_eq!(compare(&empty, &one), Ordering::Less);
        assert_eq!(compare(&one, &empty), Ordering::Greater);
    }

    #[test]
    fn compare_does_not_mutate_bindings() {
        let a = m(0, &[3, 1, 2]);
        let b = m(0, &[2, 3, 1]);
        let before = (a.clone(), b.clone());
        let first = compare(&a, &b);
        let second = compare(&a, &b);
        assert_eq!(first, second);
        assert_eq!((a, b), before);
    }

    #[test]
    fn sort_matches_orders_oldest_first() {
        let mut batch = vec![m(0, &[4, 9]), m(1, &[2, 1]), m(0, &[1, 2]), m(0, &[3])];
        sort_matches(&mut batch);
        assert_eq!(
            batch,
            vec![m(0, &[1, 2]), m(1, &[2, 1]), m(0, &[3]), m(0, &[4, 9])]
        );
    }
}
