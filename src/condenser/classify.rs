//! Line classification.
//!
//! A line is first checked against the noise filter, then against an ordered
//! table of keep rules. The first rule that matches decides the line's kind;
//! a line matching no rule is dropped.

use super::patterns::{
    is_high_mana_value, BARE_TURN_HEADER, CAST_VERB, DRAW_STEP, EXTRA_DRAW, HIGH_CMC_ANNOTATION,
    LIFE_CHANGE, PAREN_MANA_VALUE, PRIORITY_PASS, SPELL_CAST, UNTAP_STEP, WIN_CONDITION,
    ZONE_CHANGE_GY_TO_BF,
};
use super::types::EventKind;

/// One keep rule: a predicate over the raw line and the kind it yields.
pub struct Rule {
    pub kind: EventKind,
    pub matches: fn(&str) -> bool,
}

/// Keep rules in priority order. Life and mana-value rules come before the
/// generic cast fallback so they are never shadowed by it.
pub const RULES: &[Rule] = &[
    Rule {
        kind: EventKind::LifeChange,
        matches: is_life_change,
    },
    Rule {
        kind: EventKind::SpellCastHighCmc,
        matches: is_high_cmc_cast,
    },
    Rule {
        kind: EventKind::ZoneChangeGyToBf,
        matches: is_graveyard_to_battlefield,
    },
    Rule {
        kind: EventKind::WinCondition,
        matches: is_win_condition,
    },
    Rule {
        kind: EventKind::SpellCast,
        matches: is_spell_cast,
    },
];

/// Whether a line is structural noise.
///
/// A draw-step line that also reports an above-normal draw is not noise.
pub fn is_noise(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return true;
    }

    if PRIORITY_PASS.is_match(trimmed) || UNTAP_STEP.is_match(trimmed) {
        return true;
    }

    if DRAW_STEP.is_match(trimmed) {
        return !EXTRA_DRAW.is_match(trimmed);
    }

    BARE_TURN_HEADER.is_match(trimmed)
}

/// Classify a single transcript line.
///
/// Returns `None` for noise and for lines no keep rule recognizes. Only the
/// noise filter trims; keep rules see the line as written.
pub fn classify_line(line: &str) -> Option<EventKind> {
    if is_noise(line) {
        return None;
    }

    RULES
        .iter()
        .find(|rule| (rule.matches)(line))
        .map(|rule| rule.kind)
}

fn is_life_change(line: &str) -> bool {
    LIFE_CHANGE.is_match(line)
}

fn is_high_cmc_cast(line: &str) -> bool {
    if HIGH_CMC_ANNOTATION.is_match(line) {
        return true;
    }
    let Some(verb) = CAST_VERB.find(line) else {
        return false;
    };
    PAREN_MANA_VALUE
        .captures_iter(&line[verb.end()..])
        .filter_map(|caps| caps.get(1))
        .any(|digits| is_high_mana_value(digits.as_str()))
}

fn is_graveyard_to_battlefield(line: &str) -> bool {
    ZONE_CHANGE_GY_TO_BF.is_match(line)
}

fn is_win_condition(line: &str) -> bool {
    WIN_CONDITION.is_match(line)
}

fn is_spell_cast(line: &str) -> bool {
    SPELL_CAST.is_match(line)
}
