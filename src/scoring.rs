// ABOUTME: Daily score calculation under a swappable path rubric
// ABOUTME: Capped count contributions, flat and inverted flag awards, clamped total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

//! Converts one day's activity record into a bounded score.
//!
//! Scoring is a pure function of (record, rubric) and has no error
//! conditions: fields absent from the record default to zero/false, and a
//! rubric with no rule for a field simply contributes nothing.

use crate::config::PathRubric;
use crate::models::ActivityRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display floor and ceiling for a daily score.
const SCORE_FLOOR: f64 = 0.0;
const SCORE_CEILING: f64 = 100.0;

/// A day's score plus its per-activity point breakdown.
///
/// The breakdown keeps signed, un-clamped contributions; the total is the
/// breakdown sum clamped to the display range. Keys are stable activity
/// names, ordered, so identical inputs serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Total score, clamped to [0, 100].
    pub total: f64,
    /// Signed point contribution per activity, nonzero entries only.
    pub breakdown: BTreeMap<String, f64>,
}

impl ScoreResult {
    /// Score of a day with nothing logged.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            total: 0.0,
            breakdown: BTreeMap::new(),
        }
    }
}

/// Stateless score calculator.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Score a single day under the given rubric.
    #[must_use]
    pub fn score(record: &ActivityRecord, rubric: &PathRubric) -> ScoreResult {
        let mut breakdown = BTreeMap::new();
        let mut total = 0.0;

        for (field, rule) in &rubric.count_rules {
            let units = record.count(*field).min(rule.cap_units);
            let points = f64::from(units) * rule.per_unit;
            if points != 0.0 {
                breakdown.insert(field.key().to_owned(), points);
                total += points;
            }
        }

        for (field, rule) in &rubric.flag_rules {
            if record.flag(*field) {
                let points = if rule.inverted { -rule.award } else { rule.award };
                if points != 0.0 {
                    breakdown.insert(field.key().to_owned(), points);
                    total += points;
                }
            }
        }

        ScoreResult {
            total: total.clamp(SCORE_FLOOR, SCORE_CEILING),
            breakdown,
        }
    }
}
