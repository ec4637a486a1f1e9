// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! match-order: deterministic priority order over candidate rewrite matches.
//!
//! A hypergraph rewriting engine discovers candidate matches in whatever order
//! its matcher happens to produce them. This crate fixes the order in which
//! those candidates are applied: [`order::compare`] is a strict weak ordering
//! over [`Match`] values that depends only on element creation order and rule
//! declaration order, and [`MatchPool`] keeps the live candidates sorted by it
//! so the scheduler can always take the minimum.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod candidate;
mod config;
mod digest;
mod ident;
/// Match priority relation (the four-stage cascade).
pub mod order;
mod pool;
/// Pool telemetry sinks.
pub mod telemetry;

// Re-exports for stable public API
/// Candidate match record and construction errors.
pub use candidate::{Match, MatchError};
/// Pool configuration.
pub use config::{DuplicatePolicy, PoolConfig};
/// Canonical digest over an applied match sequence.
pub use digest::sequence_digest;
/// Identifier types for elements and rules.
pub use ident::{ElementId, Hash, RuleId};
/// Priority relation entry points.
pub use order::{compare, precedes, PriorityDecision, PriorityStage};
/// Ordered pool of pending matches.
pub use pool::{MatchPool, PoolError};
/// Telemetry sink trait and stock implementations.
pub use telemetry::{NullTelemetrySink, TelemetrySink, TracingTelemetrySink};
