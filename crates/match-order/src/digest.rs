// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canonical digest over a sequence of applied matches.
use blake3::Hasher;

use crate::candidate::Match;
use crate::ident::Hash;

const SEQUENCE_DOMAIN: &[u8] = b"match-seq:v1";

/// Hashes an application sequence so two runs can be compared by value.
///
/// Encoding (all integers little-endian), after the `match-seq:v1` domain tag:
/// for each match, the rule id as `u32`, the binding length as `u64`, then
/// every bound element id as `u64` in binding order. Changing this layout
/// changes every recorded digest.
pub fn sequence_digest<'a, I>(matches: I) -> Hash
where
    I: IntoIterator<Item = &'a Match>,
{
    let mut hasher = Hasher::new();
    hasher.update(SEQUENCE_DOMAIN);
    for candidate in matches {
        hasher.update(&candidate.rule().value().to_le_bytes());
        hasher.update(&(candidate.arity() as u64).to_le_bytes());
        for element in candidate.elements() {
            hasher.update(&element.value().to_le_bytes());
        }
    }
    hasher.finalize().into()
}
