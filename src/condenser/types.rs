//! Data structures produced by the condenser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept from a classified line.
pub const MAX_EVENT_LINE_CHARS: usize = 200;

/// Semantic category of a kept transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Life total changed, or life was lost or gained.
    LifeChange,
    /// A spell with mana value 5 or more was cast.
    SpellCastHighCmc,
    /// A card moved from a graveyard to the battlefield.
    ZoneChangeGyToBf,
    /// The game was won or lost.
    WinCondition,
    /// Any other cast.
    SpellCast,
}

impl EventKind {
    /// Wire name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::LifeChange => "life_change",
            EventKind::SpellCastHighCmc => "spell_cast_high_cmc",
            EventKind::ZoneChangeGyToBf => "zone_change_gy_to_bf",
            EventKind::WinCondition => "win_condition",
            EventKind::SpellCast => "spell_cast",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transcript line retained in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeptEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Trimmed line text, at most [`MAX_EVENT_LINE_CHARS`] characters.
    pub line: String,
}

impl KeptEvent {
    /// Build an event from a raw line, trimming and truncating it.
    pub fn new(kind: EventKind, raw_line: &str) -> Self {
        Self {
            kind,
            line: truncate_chars(raw_line.trim(), MAX_EVENT_LINE_CHARS),
        }
    }
}

/// Mana activity observed within one turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnManaInfo {
    pub mana_events: u32,
}

/// Condensed digest of one game transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondensedSummary {
    pub kept_events: Vec<KeptEvent>,
    pub mana_per_turn: BTreeMap<u32, TurnManaInfo>,
    pub cards_drawn_per_turn: BTreeMap<u32, u32>,
    pub turn_count: u32,
}

impl CondensedSummary {
    /// Count kept events of a given kind.
    pub fn count_kind(&self, kind: EventKind) -> usize {
        self.kept_events.iter().filter(|e| e.kind == kind).count()
    }

    /// Whether nothing at all was extracted from the transcript.
    pub fn is_empty(&self) -> bool {
        self.kept_events.is_empty()
            && self.mana_per_turn.is_empty()
            && self.cards_drawn_per_turn.is_empty()
            && self.turn_count == 0
    }
}

/// A turn header found in the transcript: its number and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnMarker {
    pub turn_number: u32,
    pub start: usize,
}

/// The byte range of the transcript attributed to one turn header.
///
/// `end` equals the next span's `start`, or the transcript length for the last span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSpan {
    pub turn_number: u32,
    pub start: usize,
    pub end: usize,
}

impl TurnSpan {
    /// The slice of `log` covered by this span.
    pub fn slice<'a>(&self, log: &'a str) -> &'a str {
        &log[self.start..self.end]
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// Keep at most `max` characters (not bytes) of `s`.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
