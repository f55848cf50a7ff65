//! Heuristic complexity score.
//!
//! Additive, base 1, capped at [`MAX_SCORE`]. Each tiered factor applies its
//! highest crossed threshold only.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Language;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// `(threshold, bonus)` pairs, highest first. First strictly exceeded wins.
const LINE_TIERS: &[(usize, u8)] = &[(500, 3), (200, 2), (50, 1)];
const PLATFORM_TIERS: &[(usize, u8)] = &[(10, 3), (5, 2), (0, 1)];

const PY_FUNCTION_LIMIT: usize = 10;
const PY_CLASS_LIMIT: usize = 3;
const SQL_JOIN_LIMIT: usize = 5;
const SQL_CASE_WHEN_LIMIT: usize = 3;

static DEF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def\s+\w+").unwrap_or_else(|_| panic!("Invalid Regex")));
static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class\s+\w+").unwrap_or_else(|_| panic!("Invalid Regex")));
static CASE_WHEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CASE\s+WHEN").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Scores a file from its text, language, and platform-operation match count.
#[must_use]
pub fn complexity_score(content: &str, language: Language, platform_matches: usize) -> u8 {
    let mut score = u32::from(MIN_SCORE);

    score += u32::from(tier_bonus(LINE_TIERS, non_blank_lines(content)));
    score += u32::from(match language {
        Language::Python => python_bonus(content),
        Language::Sql => sql_bonus(content),
        _ => 0,
    });
    score += u32::from(tier_bonus(PLATFORM_TIERS, platform_matches));

    u8::try_from(score.min(u32::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
}

/// Counts lines that contain anything besides whitespace.
#[must_use]
pub fn non_blank_lines(content: &str) -> usize {
    content.split('\n').filter(|l| !l.trim().is_empty()).count()
}

fn tier_bonus(tiers: &[(usize, u8)], value: usize) -> u8 {
    tiers
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map_or(0, |(_, bonus)| *bonus)
}

fn python_bonus(content: &str) -> u8 {
    let mut bonus = 0;
    if DEF_RE.find_iter(content).count() > PY_FUNCTION_LIMIT {
        bonus += 2;
    }
    if CLASS_RE.find_iter(content).count() > PY_CLASS_LIMIT {
        bonus += 2;
    }
    if content.contains("lambda") {
        bonus += 1;
    }
    bonus
}

fn sql_bonus(content: &str) -> u8 {
    let upper = content.to_uppercase();
    let mut bonus = 0;
    if upper.matches("JOIN").count() > SQL_JOIN_LIMIT {
        bonus += 2;
    }
    if CASE_WHEN_RE.find_iter(&upper).count() > SQL_CASE_WHEN_LIMIT {
        bonus += 2;
    }
    if upper.contains("RECURSIVE") {
        bonus += 3;
    }
    bonus
}
