// ABOUTME: Tunable thresholds for the psychology classifier decision tables
// ABOUTME: Every open numeric constant lives here as a named, documented default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

//! Classifier thresholds.
//!
//! The classification rules are fixed; everything numeric about them is
//! configuration with documented defaults, never an inline literal at a
//! use site.

use serde::{Deserialize, Serialize};

/// Thresholds driving habit-phase, motivation, and coaching-need rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Tracked days below which the user is still in habit formation.
    pub formation_days: u32,
    /// Tracked days required before mastery is possible.
    pub mastery_days: u32,
    /// Logging consistency (%) required for mastery.
    pub high_consistency_pct: f64,
    /// Logging consistency (%) counting as "decent" for moderate motivation.
    pub decent_consistency_pct: f64,
    /// Minimum longest streak for a broken streak to signal erosion.
    pub erosion_min_longest: u32,
    /// A lost streak at least this long counts as a sharp drop.
    pub sharp_drop_streak: u32,
    /// A sharp drop only reads as crisis when the break is this recent (days).
    pub crisis_recency_days: i64,
    /// Points a category rate must fall (window vs recent) to count as a drop.
    pub burnout_drop_pct: f64,
    /// Simultaneous category drops that read as burnout.
    pub burnout_category_count: usize,
    /// A fresh streak at most this long can still be a restart.
    pub rebuild_max_streak: u32,
    /// Minimum gap (days) before a fresh streak counts as a restart.
    pub rebuild_gap_days: i64,
    /// Days of silence after which the user is long absent.
    pub long_absence_days: i64,
    /// Category participation (%) at or below which a risk factor is noted.
    pub low_category_rate_pct: f64,
    /// Category participation (%) at or above which a strength is noted.
    pub high_category_rate_pct: f64,
    /// Participation (%) above which a rubric-rewarded category counts as
    /// aligned with the chosen path.
    pub alignment_baseline_pct: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            formation_days: 30,
            mastery_days: 90,
            high_consistency_pct: 70.0,
            decent_consistency_pct: 40.0,
            erosion_min_longest: 7,
            sharp_drop_streak: 14,
            crisis_recency_days: 7,
            burnout_drop_pct: 30.0,
            burnout_category_count: 3,
            rebuild_max_streak: 3,
            rebuild_gap_days: 3,
            long_absence_days: 14,
            low_category_rate_pct: 25.0,
            high_category_rate_pct: 80.0,
            alignment_baseline_pct: 50.0,
        }
    }
}
