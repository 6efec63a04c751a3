//! Per-turn aggregation of mana activity and card draw.
//!
//! Both aggregators take the span list computed once by the turn indexer and
//! inspect only the text each span covers. When a turn number repeats, the
//! later span's value replaces the earlier one.

use std::collections::BTreeMap;

use super::patterns::{DRAW_MULTIPLE, DRAW_SINGLE, MANA_PRODUCED, TAP_FOR};
use super::types::{TurnManaInfo, TurnSpan};

/// Count mana-production phrases plus `tap ... for` phrases in each turn.
pub fn mana_per_turn(log: &str, spans: &[TurnSpan]) -> BTreeMap<u32, TurnManaInfo> {
    let mut result = BTreeMap::new();
    for span in spans {
        let chunk = span.slice(log);
        let produced = MANA_PRODUCED.find_iter(chunk).count();
        let taps = TAP_FOR.find_iter(chunk).count();
        let mana_events = u32::try_from(produced + taps).unwrap_or(u32::MAX);
        result.insert(span.turn_number, TurnManaInfo { mana_events });
    }
    result
}

/// Total cards drawn in each turn.
pub fn cards_drawn_per_turn(log: &str, spans: &[TurnSpan]) -> BTreeMap<u32, u32> {
    let mut result = BTreeMap::new();
    for span in spans {
        let drawn = span
            .slice(log)
            .lines()
            .fold(0u32, |total, line| total.saturating_add(cards_drawn_in_line(line)));
        result.insert(span.turn_number, drawn);
    }
    result
}

/// Cards drawn by one line.
///
/// Explicit counts (`draws 3 cards`) are summed. Singular draws (`draws a card`)
/// count one each, but only on lines with no explicit count.
fn cards_drawn_in_line(line: &str) -> u32 {
    let mut numeric_seen = false;
    let mut total = 0u32;
    for caps in DRAW_MULTIPLE.captures_iter(line) {
        numeric_seen = true;
        let n = caps
            .get(1)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(u32::MAX);
        total = total.saturating_add(n);
    }
    if numeric_seen {
        return total;
    }

    let singles = DRAW_SINGLE
        .captures_iter(line)
        .filter(|caps| caps.get(1).map_or(true, |plural| plural.as_str().is_empty()))
        .count();
    u32::try_from(singles).unwrap_or(u32::MAX)
}
