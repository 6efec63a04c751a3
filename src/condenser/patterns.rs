//! Compiled regular expressions used by the classifier and the aggregators.
//!
//! All patterns are case-insensitive and compiled once on first use. The
//! `regex` crate matches in linear time, so no input can make them backtrack.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

// Noise

pub static PRIORITY_PASS: Lazy<Regex> = Lazy::new(|| compile(r"(?i)player\s+passes\s+priority"));

pub static UNTAP_STEP: Lazy<Regex> = Lazy::new(|| compile(r"(?i)untap\s+step"));

pub static DRAW_STEP: Lazy<Regex> = Lazy::new(|| compile(r"(?i)draw\s+step"));

/// A `Turn N:` header with nothing after the colon.
pub static BARE_TURN_HEADER: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^Turn\s+\d+:\s*$"));

/// More cards than the normal draw-step card.
pub static EXTRA_DRAW: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)draws?\s+(?:an?\s+)?(?:additional|extra|\d+)\s+card|draw\s+\d+\s+card")
});

// Keep rules

pub static LIFE_CHANGE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)life\s+(?:total\s+)?(?:change|loss|gain|to)|\d+\s+life|loses?\s+\d+\s+life|gains?\s+\d+\s+life",
    )
});

/// Explicit `CMC N` annotation with N >= 5 or multi-digit.
pub static HIGH_CMC_ANNOTATION: Lazy<Regex> = Lazy::new(|| compile(r"(?i)CMC\s*(?:[5-9]|\d{2,})"));

/// Cast verb that may be followed later on the line by a mana value.
pub static CAST_VERB: Lazy<Regex> = Lazy::new(|| compile(r"(?i)cast(?:s|ing)?\s+"));

/// Parenthesized number such as `(8)` or `(8 )`, read as a mana value after a cast verb.
pub static PAREN_MANA_VALUE: Lazy<Regex> = Lazy::new(|| compile(r"\((\d+)\s*\)"));

pub static ZONE_CHANGE_GY_TO_BF: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)graveyard\s*->\s*battlefield|graveyard\s+to\s+battlefield|put.*from.*graveyard.*onto.*battlefield",
    )
});

pub static WIN_CONDITION: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)wins?\s+the\s+game|game\s+over|winner|wins\s+the\s+match|loses\s+the\s+game")
});

pub static SPELL_CAST: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bcasts?\s+"));

// Turn structure

pub static TURN_HEADER: Lazy<Regex> = Lazy::new(|| compile(r"(?im)^Turn\s+(\d+)"));

// Metrics

pub static MANA_PRODUCED: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)(?:adds?|produces?|tap(?:s|ped)?\s+for)\s+[\w\s]*mana|\d+\s+mana\s+produced")
});

/// Generic `tap <something> for` phrasing.
pub static TAP_FOR: Lazy<Regex> = Lazy::new(|| compile(r"(?i)tap(?:s|ped)?\s+.*?\s+for"));

pub static DRAW_MULTIPLE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)draws?\s+(\d+)\s+cards?"));

/// Singular draw. The trailing group captures a plural `s` so callers can reject `cards`.
pub static DRAW_SINGLE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)draws?\s+(?:a\s+)?card(s?)"));

// Outcome

pub static WINNER: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(.+?)\s+(?:wins\s+the\s+game|has\s+won!?)"));

pub static GAME_RESULT: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^Game Result: Game (\d+) ended"));

/// Whether a decimal digit string denotes a mana value of at least 5.
///
/// Works on the digits directly so arbitrarily long numbers cannot overflow.
pub fn is_high_mana_value(digits: &str) -> bool {
    let significant = digits.trim_start_matches('0');
    match significant.len() {
        0 => false,
        1 => significant.as_bytes()[0] >= b'5',
        _ => true,
    }
}
