// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared fixtures for the match-order benchmarks.
use match_order::{ElementId, Match, RuleId};

/// Deterministic splitmix64 stream so every bench run sees the same matches.
#[derive(Debug, Clone)]
pub struct FixtureRng(u64);

impl FixtureRng {
    /// Seeds the stream.
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next value in `0..bound` (`bound` must be non-zero).
    pub fn below(&mut self, bound: u64) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        (z ^ (z >> 31)) % bound
    }
}

/// `n` matches of the given arity over `elements` live elements and `rules` rules.
pub fn random_matches(
    rng: &mut FixtureRng,
    n: usize,
    arity: usize,
    elements: u64,
    rules: u32,
) -> Vec<Match> {
    (0..n)
        .map(|_| {
            let rule = RuleId::from_raw(
                u32::try_from(rng.below(u64::from(rules))).unwrap_or_default(),
            );
            let binding: Vec<ElementId> = (0..arity)
                .map(|_| ElementId::from_raw(rng.below(elements)))
                .collect();
            Match::new(rule, binding)
        })
        .collect()
}
