// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

// Telemetry hooks for the match pool. The pool never logs directly; it reports
// through an injected sink so hosts choose between silence and `tracing`.

use crate::candidate::Match;
use crate::ident::ElementId;

/// Receives pool lifecycle events.
///
/// Implementations must be cheap: every call happens on the scheduling path.
pub trait TelemetrySink: Send + Sync {
    /// A match entered the pool; `pending` is the pool size afterwards.
    fn on_inserted(&self, candidate: &Match, pending: usize);

    /// A content-identical match was already pending.
    fn on_duplicate(&self, candidate: &Match);

    /// The minimum match left the pool to be applied.
    fn on_selected(&self, candidate: &Match, remaining: usize);

    /// Destroying `element` removed `removed` pending matches.
    fn on_invalidated(&self, element: ElementId, removed: usize);
}

/// Sink that drops every event (default).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTelemetrySink;

impl TelemetrySink for NullTelemetrySink {
    fn on_inserted(&self, _candidate: &Match, _pending: usize) {}
    fn on_duplicate(&self, _candidate: &Match) {}
    fn on_selected(&self, _candidate: &Match, _remaining: usize) {}
    fn on_invalidated(&self, _element: ElementId, _removed: usize) {}
}

/// Sink that forwards events to `tracing` with structured fields.
///
/// Inserts and duplicates are logged at `TRACE`, selections and invalidations
/// at `DEBUG`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn on_inserted(&self, candidate: &Match, pending: usize) {
        tracing::trace!(
            rule = %candidate.rule(),
            arity = candidate.arity(),
            pending,
            "match queued"
        );
    }

    fn on_duplicate(&self, candidate: &Match) {
        tracing::trace!(
            rule = %candidate.rule(),
            elements = ?candidate.elements(),
            "duplicate match ignored"
        );
    }

    fn on_selected(&self, candidate: &Match, remaining: usize) {
        tracing::debug!(
            rule = %candidate.rule(),
            elements = ?candidate.elements(),
            remaining,
            "match selected"
        );
    }

    fn on_invalidated(&self, element: ElementId, removed: usize) {
        if removed > 0 {
            tracing::debug!(%element, removed, "matches invalidated");
        }
    }
}
