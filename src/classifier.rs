// ABOUTME: Deterministic psychology classification from aggregated metrics
// ABOUTME: Ordered rule tables for motivation state, habit phase, and coaching need
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

//! Motivational and habit-state classification.
//!
//! Not a learned model: each state is decided by an ordered table of
//! guarded rules over a precomputed feature set, evaluated in priority
//! order with a catch-all default, so the function is total and each rule
//! is auditable and testable on its own. Thresholds come from
//! [`ClassifierConfig`], never inline literals.

use crate::aggregator::{MetricsReport, TrendDirection};
use crate::config::{ClassifierConfig, PathRubric};
use crate::models::{ActivityField, ScoredRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Coarse engagement classification derived from trend and consistency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotivationState {
    /// Improving trend with an active streak.
    High,
    /// Stable engagement.
    Moderate,
    /// Declining trend.
    Low,
    /// Consistency collapsed across several categories at once.
    Burnout,
    /// Just restarted after a gap.
    Rebuilding,
}

/// Lifecycle stage of habit formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitPhase {
    /// Too few tracked days to be established.
    Formation,
    /// Established and holding.
    Maintenance,
    /// Long history with high consistency.
    Mastery,
    /// Declining with a broken streak.
    Erosion,
    /// A long streak ended abruptly.
    Crisis,
}

/// Category of coaching intervention implied by phase and motivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachingNeed {
    /// Acknowledge sustained excellence.
    Celebration,
    /// Fine-tune a working routine.
    Optimization,
    /// Arrest a decline before it compounds.
    CourseCorrection,
    /// Burnout or crisis: step in directly.
    Intervention,
    /// Early days: teach the system.
    Education,
    /// Long-absent user returning.
    ReEngagement,
}

/// Terminal artifact of the analytics core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsychologyProfile {
    /// Motivation classification.
    pub motivation: MotivationState,
    /// Habit lifecycle phase.
    pub habit_phase: HabitPhase,
    /// Implied coaching intervention.
    pub coaching_need: CoachingNeed,
    /// How well recent activity matches the chosen rubric's emphasis (0-100).
    pub path_alignment: f64,
    /// Categories running below the risk threshold. May be empty.
    pub risk_factors: Vec<String>,
    /// Categories running above the strength threshold. May be empty.
    pub strength_areas: Vec<String>,
}

/// Feature set the rule tables are evaluated against.
#[derive(Debug, Clone, Copy)]
struct Features {
    total_days: u32,
    current_streak: u32,
    longest_streak: u32,
    logging_consistency: f64,
    trend: TrendDirection,
    days_since_last: Option<i64>,
    category_drops: usize,
    restarted_after_gap: bool,
}

type Predicate = fn(&Features, &ClassifierConfig) -> bool;

/// Habit-phase rules, highest priority first. Falls through to Maintenance.
const HABIT_RULES: &[(&str, Predicate, HabitPhase)] = &[
    (
        "formation",
        |f, c| f.total_days < c.formation_days,
        HabitPhase::Formation,
    ),
    (
        "crisis",
        |f, c| {
            f.current_streak == 0
                && f.longest_streak >= c.sharp_drop_streak
                && f.days_since_last
                    .is_some_and(|days| days <= c.crisis_recency_days)
        },
        HabitPhase::Crisis,
    ),
    (
        "erosion",
        |f, c| {
            matches!(f.trend, TrendDirection::Declining)
                && f.current_streak == 0
                && f.longest_streak >= c.erosion_min_longest
        },
        HabitPhase::Erosion,
    ),
    (
        "mastery",
        |f, c| f.total_days >= c.mastery_days && f.logging_consistency >= c.high_consistency_pct,
        HabitPhase::Mastery,
    ),
];

/// Motivation rules, highest priority first. Falls through to Moderate.
const MOTIVATION_RULES: &[(&str, Predicate, MotivationState)] = &[
    (
        "burnout",
        |f, c| f.category_drops >= c.burnout_category_count,
        MotivationState::Burnout,
    ),
    (
        "rebuilding",
        |f, _| f.restarted_after_gap,
        MotivationState::Rebuilding,
    ),
    (
        "high",
        |f, _| matches!(f.trend, TrendDirection::Improving) && f.current_streak > 0,
        MotivationState::High,
    ),
    (
        "low",
        |f, _| matches!(f.trend, TrendDirection::Declining),
        MotivationState::Low,
    ),
];

/// Psychology classification engine.
pub struct PsychologyClassifier {
    config: ClassifierConfig,
}

impl Default for PsychologyClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PsychologyClassifier {
    /// Classifier with default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Classifier with custom thresholds.
    #[must_use]
    pub const fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify a user's psychological state.
    ///
    /// `recent` is the last seven (or fewer) scored records, most recent
    /// first. Classification never fails: every table ends in a default.
    #[must_use]
    pub fn classify(
        &self,
        metrics: &MetricsReport,
        recent: &[ScoredRecord],
        rubric: &PathRubric,
    ) -> PsychologyProfile {
        let features = self.features(metrics, recent);

        let habit_phase = Self::first_match(HABIT_RULES, &features, &self.config)
            .unwrap_or(HabitPhase::Maintenance);
        let motivation = Self::first_match(MOTIVATION_RULES, &features, &self.config)
            .unwrap_or(MotivationState::Moderate);
        let coaching_need = self.coaching_need(motivation, habit_phase, &features);

        let (risk_factors, strength_areas) = self.risk_and_strengths(metrics);

        PsychologyProfile {
            motivation,
            habit_phase,
            coaching_need,
            path_alignment: self.path_alignment(metrics, rubric),
            risk_factors,
            strength_areas,
        }
    }

    /// Evaluate a rule table in priority order.
    fn first_match<T: Copy>(
        rules: &[(&'static str, Predicate, T)],
        features: &Features,
        config: &ClassifierConfig,
    ) -> Option<T> {
        rules.iter().find_map(|(name, applies, outcome)| {
            if applies(features, config) {
                debug!(rule = name, "classification rule matched");
                Some(*outcome)
            } else {
                None
            }
        })
    }

    /// Coaching need from the (motivation, phase) pair, priority order.
    fn coaching_need(
        &self,
        motivation: MotivationState,
        phase: HabitPhase,
        features: &Features,
    ) -> CoachingNeed {
        let long_absent = features
            .days_since_last
            .is_some_and(|days| days >= self.config.long_absence_days);

        if motivation == MotivationState::Burnout || phase == HabitPhase::Crisis {
            CoachingNeed::Intervention
        } else if long_absent || motivation == MotivationState::Rebuilding {
            CoachingNeed::ReEngagement
        } else if phase == HabitPhase::Formation {
            CoachingNeed::Education
        } else if motivation == MotivationState::High && phase == HabitPhase::Mastery {
            CoachingNeed::Celebration
        } else if motivation == MotivationState::Low {
            CoachingNeed::CourseCorrection
        } else {
            CoachingNeed::Optimization
        }
    }

    fn features(&self, metrics: &MetricsReport, recent: &[ScoredRecord]) -> Features {
        Features {
            total_days: metrics.streaks.total_days_tracked,
            current_streak: metrics.streaks.current,
            longest_streak: metrics.streaks.longest,
            logging_consistency: metrics.logging_consistency,
            trend: metrics.trend,
            days_since_last: metrics.days_since_last_entry,
            category_drops: self.category_drops(metrics, recent),
            restarted_after_gap: self.restarted_after_gap(metrics, recent),
        }
    }

    /// Count categories whose recent participation fell sharply below the
    /// window rate. One category slipping is an off week; several at once
    /// reads as burnout.
    fn category_drops(&self, metrics: &MetricsReport, recent: &[ScoredRecord]) -> usize {
        if recent.is_empty() {
            return 0;
        }
        let recent_len = recent.len() as f64;

        ActivityField::ALL
            .into_iter()
            .filter(|field| {
                let window_rate = metrics
                    .category_rates
                    .get(field.category_key())
                    .copied()
                    .unwrap_or(0.0);
                if window_rate < self.config.decent_consistency_pct {
                    return false;
                }
                let recent_active = recent
                    .iter()
                    .filter(|scored| scored.record.category_active(*field))
                    .count() as f64;
                let recent_rate = recent_active / recent_len * 100.0;
                window_rate - recent_rate >= self.config.burnout_drop_pct
            })
            .count()
    }

    /// A short fresh streak that follows a measurable gap, with a longer
    /// streak somewhere behind it: the user has just come back.
    fn restarted_after_gap(&self, metrics: &MetricsReport, recent: &[ScoredRecord]) -> bool {
        let current = metrics.streaks.current;
        if current == 0
            || current > self.config.rebuild_max_streak
            || metrics.streaks.longest <= current
        {
            return false;
        }

        let mut dates: Vec<NaiveDate> = recent.iter().map(|scored| scored.record.date).collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.dedup();

        // Walk past the current run, then measure the gap to the record before it.
        let run = dates
            .windows(2)
            .take_while(|pair| (pair[0] - pair[1]).num_days() == 1)
            .count()
            + 1;
        match (dates.get(run - 1), dates.get(run)) {
            (Some(&run_oldest), Some(&previous)) => {
                (run_oldest - previous).num_days() - 1 >= self.config.rebuild_gap_days
            }
            _ => false,
        }
    }

    /// Share of rubric-rewarded categories the user is active in above the
    /// baseline rate. An empty rubric has nothing to misalign with.
    fn path_alignment(&self, metrics: &MetricsReport, rubric: &PathRubric) -> f64 {
        let rewarded = rubric.rewarded_fields();
        if rewarded.is_empty() {
            return 100.0;
        }

        let aligned = rewarded
            .iter()
            .filter(|field| {
                metrics
                    .category_rates
                    .get(field.category_key())
                    .copied()
                    .unwrap_or(0.0)
                    >= self.config.alignment_baseline_pct
            })
            .count();

        aligned as f64 / rewarded.len() as f64 * 100.0
    }

    /// Risk and strength labels from per-category rates. Suppressed for an
    /// empty window, where every rate is trivially zero.
    fn risk_and_strengths(&self, metrics: &MetricsReport) -> (Vec<String>, Vec<String>) {
        if metrics.records_in_window == 0 {
            return (Vec::new(), Vec::new());
        }

        let mut risks = Vec::new();
        let mut strengths = Vec::new();
        for field in ActivityField::ALL {
            let rate = metrics
                .category_rates
                .get(field.category_key())
                .copied()
                .unwrap_or(0.0);
            if rate <= self.config.low_category_rate_pct {
                risks.push(format!("{} consistency low", field.category_label()));
            } else if rate >= self.config.high_category_rate_pct {
                strengths.push(format!(
                    "exceptional {} consistency",
                    field.category_label()
                ));
            }
        }
        (risks, strengths)
    }
}
