//! Condensing of raw match transcripts into compact digests.
//!
//! A transcript is plain text with one action per line and `Turn N` headers
//! marking turn boundaries. The condenser reduces it to the handful of lines
//! that matter for judging a deck plus a few per-turn counters.
//!
//! # Pipeline
//!
//! 1. **Classify** every line ([`classify_line`]): drop noise, tag the rest
//!    with an [`EventKind`] using an ordered rule table.
//! 2. **Index turns** once ([`turn_spans`]): locate headers and split the
//!    transcript into byte spans.
//! 3. **Aggregate** over the spans ([`mana_per_turn`], [`cards_drawn_per_turn`]).
//! 4. **Assemble** a [`CondensedSummary`].
//!
//! Every stage is a pure function of its input. The same transcript always
//! yields an equal summary, and transcripts can be condensed in parallel.
//!
//! # Module Structure
//!
//! - [`patterns`] - Compiled regular expressions
//! - [`classify`] - Noise filter and keep-rule table
//! - [`turns`] - Turn header indexing and span partitioning
//! - [`metrics`] - Per-turn mana and draw aggregation
//! - [`outcome`] - Winner and decisive-turn detection
//! - [`types`] - Output data structures

pub mod classify;
pub mod metrics;
pub mod outcome;
pub mod patterns;
pub mod turns;
pub mod types;

pub use classify::{classify_line, is_noise, Rule, RULES};
pub use metrics::{cards_drawn_per_turn, mana_per_turn};
pub use outcome::{detect_winner, winning_turn, GameOutcome};
pub use turns::{span_at, spans_from_markers, turn_count, turn_markers, turn_spans};
pub use types::{
    CondensedSummary, EventKind, KeptEvent, TurnManaInfo, TurnMarker, TurnSpan,
    MAX_EVENT_LINE_CHARS,
};

/// Condense a raw transcript into a [`CondensedSummary`].
///
/// An empty transcript yields an empty summary with `turn_count == 0`.
pub fn condense(raw_log: &str) -> CondensedSummary {
    let spans = turn_spans(raw_log);
    condense_with_spans(raw_log, &spans)
}

/// Condense using a span list the caller already computed for `raw_log`.
pub fn condense_with_spans(raw_log: &str, spans: &[TurnSpan]) -> CondensedSummary {
    let kept_events = kept_events(raw_log);
    let summary = CondensedSummary {
        kept_events,
        mana_per_turn: mana_per_turn(raw_log, spans),
        cards_drawn_per_turn: cards_drawn_per_turn(raw_log, spans),
        turn_count: turn_count(spans),
    };

    tracing::debug!(
        kept = summary.kept_events.len(),
        high_cmc = summary.count_kind(EventKind::SpellCastHighCmc),
        wins = summary.count_kind(EventKind::WinCondition),
        turns = summary.turn_count,
        spans = spans.len(),
        "condensed transcript"
    );

    summary
}

/// Classify every line, keeping the ones that carry an event.
pub fn kept_events(raw_log: &str) -> Vec<KeptEvent> {
    raw_log
        .lines()
        .filter_map(|line| {
            let kind = classify_line(line)?;
            tracing::trace!(%kind, "kept line");
            Some(KeptEvent::new(kind, line))
        })
        .collect()
}
