// ABOUTME: Behavioral analytics core for sovereignty habit tracking
// ABOUTME: Scores daily logs, derives streak and trend statistics, classifies habit psychology
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

#![deny(unsafe_code)]

//! # Sovereign Intelligence
//!
//! Behavioral analytics engine behind the sovereignty habit tracker. Turns
//! a user's daily activity log into coaching-ready analysis in four pure
//! stages:
//!
//! - **Scoring**: one day's record + a swappable path rubric -> a bounded
//!   daily score with a per-activity breakdown.
//! - **Streaks**: full history -> current and longest consecutive-day
//!   streaks under a one-day grace rule.
//! - **Aggregation**: scored history over a window -> rolling statistics
//!   (averages, category participation, Bitcoin milestones, weekday
//!   patterns, trend label).
//! - **Classification**: aggregated metrics -> motivation state, habit
//!   phase, coaching need, path alignment, and risk/strength factors via
//!   deterministic, configurable rule tables.
//!
//! Storage, authentication, rendering, and the downstream LLM call are
//! external collaborators; the [`context::CoachingContextAssembler`] is
//! the single contract boundary, consuming [`context::EntryStore`] and
//! [`context::RubricStore`] ports and returning a
//! [`context::CoachingContext`] bundle.
//!
//! Every stage is a pure, synchronous function of immutable inputs;
//! nothing here performs I/O or holds state between invocations, so
//! per-user computations are embarrassingly parallel at the caller's
//! discretion.
//!
//! ## Example
//!
//! ```rust
//! use sovereign_intelligence::config::PathRubric;
//! use sovereign_intelligence::models::ActivityRecord;
//! use sovereign_intelligence::scoring::ScoreCalculator;
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//! let mut record = ActivityRecord::new(uuid::Uuid::new_v4(), date);
//! record.meals_cooked = 2;
//! record.meditated = true;
//!
//! let result = ScoreCalculator::score(&record, &PathRubric::balanced());
//! assert!(result.total > 0.0 && result.total <= 100.0);
//! ```

/// Window-scoped metrics aggregation.
pub mod aggregator;
/// Psychology classification rule tables.
pub mod classifier;
/// Rubrics, milestone ladders, and thresholds.
pub mod config;
/// Coaching context assembly over external stores.
pub mod context;
/// Error taxonomy.
pub mod errors;
/// Activity records and fields.
pub mod models;
/// Daily score calculation.
pub mod scoring;
/// Streak statistics.
pub mod streaks;

pub use aggregator::{MetricsAggregator, MetricsReport, TrendDirection};
pub use classifier::{
    CoachingNeed, HabitPhase, MotivationState, PsychologyClassifier, PsychologyProfile,
};
pub use config::{AnalyticsConfig, ClassifierConfig, MilestoneLadder, PathRubric};
pub use context::{CoachingContext, CoachingContextAssembler, EntryStore, RubricStore};
pub use errors::{AnalyticsError, AnalyticsResult};
pub use models::{ActivityField, ActivityRecord, ScoredRecord};
pub use scoring::{ScoreCalculator, ScoreResult};
pub use streaks::{StreakCalculator, StreakState};
