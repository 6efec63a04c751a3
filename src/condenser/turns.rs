//! Turn boundary detection.

use super::patterns::TURN_HEADER;
use super::types::{TurnMarker, TurnSpan};

/// Find every `Turn N` header at the start of a line, in document order.
///
/// Markers are neither sorted nor de-duplicated. Numbers too large for a `u32`
/// saturate to `u32::MAX`, so the header still closes the previous turn.
pub fn turn_markers(log: &str) -> Vec<TurnMarker> {
    TURN_HEADER
        .captures_iter(log)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            // The capture is all digits, so parsing only fails on overflow.
            let number = caps.get(1)?.as_str().parse::<u32>().unwrap_or(u32::MAX);
            Some(TurnMarker {
                turn_number: number,
                start: whole.start(),
            })
        })
        .collect()
}

/// Partition the log into spans, one per turn header.
///
/// Text before the first header belongs to no span.
pub fn turn_spans(log: &str) -> Vec<TurnSpan> {
    spans_from_markers(&turn_markers(log), log.len())
}

/// Close each marker's span at the next marker's start, or at `log_len`.
pub fn spans_from_markers(markers: &[TurnMarker], log_len: usize) -> Vec<TurnSpan> {
    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| TurnSpan {
            turn_number: marker.turn_number,
            start: marker.start,
            end: markers.get(i + 1).map_or(log_len, |next| next.start),
        })
        .collect()
}

/// The span holding byte `offset`, if any.
///
/// Spans come from [`spans_from_markers`] and are in document order, so this
/// is a binary search on their starts.
pub fn span_at(spans: &[TurnSpan], offset: usize) -> Option<&TurnSpan> {
    let idx = spans.partition_point(|span| span.start <= offset);
    spans[..idx].last().filter(|span| span.contains(offset))
}

/// Highest turn number seen, or 0 when the log has no turn headers.
pub fn turn_count(spans: &[TurnSpan]) -> u32 {
    spans.iter().map(|s| s.turn_number).max().unwrap_or(0)
}
