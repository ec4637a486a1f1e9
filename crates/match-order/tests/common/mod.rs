// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use match_order::{ElementId, Match, RuleId};
use proptest::prelude::*;

/// Builds a match from raw rule and element ids.
pub fn m(rule: u32, raw: &[u64]) -> Match {
    Match::new(
        RuleId::from_raw(rule),
        raw.iter()
            .copied()
            .map(ElementId::from_raw)
            .collect::<Vec<_>>(),
    )
}

/// Small id ranges so generated matches collide often enough to exercise
/// every stage of the cascade.
pub fn arb_match() -> impl Strategy<Value = Match> {
    (0u32..3, prop::collection::vec(0u64..6, 0..5)).prop_map(|(rule, raw)| m(rule, &raw))
}

/// Matches with bindings long enough to leave the inline sort buffer.
pub fn arb_wide_match() -> impl Strategy<Value = Match> {
    (0u32..2, prop::collection::vec(0u64..4, 6..14)).prop_map(|(rule, raw)| m(rule, &raw))
}

/// Same multiset of elements and same rule, bound in two different orders.
pub fn arb_permuted_pair() -> impl Strategy<Value = (Match, Match)> {
    (0u32..3, prop::collection::vec(0u64..8, 1..6))
        .prop_flat_map(|(rule, raw)| {
            let shuffled = Just(raw.clone()).prop_shuffle();
            (Just(rule), Just(raw), shuffled)
        })
        .prop_map(|(rule, raw, shuffled)| (m(rule, &raw), m(rule, &shuffled)))
}
