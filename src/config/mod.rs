// ABOUTME: Configuration module for the analytics core
// ABOUTME: Rubrics, milestone ladders, classifier thresholds, and pipeline limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

//! Loadable configuration for every tunable in the pipeline.

/// Psychology classifier thresholds.
pub mod classifier;
/// Milestone ladder over cumulative Bitcoin units.
pub mod milestones;
/// Path scoring rubrics.
pub mod rubric;

pub use classifier::ClassifierConfig;
pub use milestones::{Milestone, MilestoneLadder};
pub use rubric::{CountRule, FlagRule, PathRubric};

use serde::{Deserialize, Serialize};

/// Trend labelling parameters for the aggregator's half-split comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Relative difference between half means before the label leaves
    /// "stable" (0.05 = 5%).
    pub relative_threshold: f64,
    /// Below this many records the window has insufficient signal and the
    /// label defaults to "stable".
    pub min_records: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            relative_threshold: 0.05,
            min_records: 4,
        }
    }
}

/// Top-level configuration injected into the pipeline.
///
/// Read-only once constructed; the pipeline itself stays stateless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Trend labelling parameters.
    pub trend: TrendConfig,
    /// Classifier thresholds.
    pub classifier: ClassifierConfig,
    /// Milestone ladder.
    pub milestones: MilestoneLadder,
    /// Pipeline limits (window validation, history fetch depth).
    pub limits: PipelineLimits,
}

/// Bounds on what the assembler will compute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineLimits {
    /// Largest window a caller may request, in days.
    pub max_window_days: u32,
    /// How far back the assembler fetches history so streak statistics see
    /// more than the display window.
    pub streak_lookback_days: u32,
}

impl Default for PipelineLimits {
    fn default() -> Self {
        Self {
            max_window_days: 365,
            streak_lookback_days: 365,
        }
    }
}
