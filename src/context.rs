// ABOUTME: Coaching context assembly over external record and rubric stores
// ABOUTME: Orchestrates score, streak, metrics, and psychology stages in strict order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

//! Pipeline orchestration.
//!
//! The assembler is the only piece that talks to external collaborators.
//! It validates the request, fetches history, and runs the four pure
//! stages in sequence. Failures are fatal to the whole request: a caller
//! must never receive a default profile in place of an error, since that
//! would drive incorrect coaching downstream.

use crate::aggregator::{MetricsAggregator, MetricsReport};
use crate::classifier::{PsychologyClassifier, PsychologyProfile};
use crate::config::{AnalyticsConfig, PathRubric};
use crate::errors::{AnalyticsError, AnalyticsResult};
use crate::models::{ActivityRecord, ScoredRecord};
use crate::scoring::{ScoreCalculator, ScoreResult};
use crate::streaks::StreakState;
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// How many of the most recent records the classifier examines.
const RECENT_ENTRY_LIMIT: usize = 7;

/// External record store: committed daily entries keyed by (user, date).
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Fetch the user's records in the inclusive date range.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::Upstream`] when the store is unavailable.
    async fn entries_in_range(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AnalyticsResult<Vec<ActivityRecord>>;
}

/// External rubric store: lookup by rubric name.
#[async_trait]
pub trait RubricStore: Send + Sync {
    /// Fetch a rubric by name, or `None` if no such rubric exists.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::Upstream`] when the store is unavailable.
    async fn rubric(&self, name: &str) -> AnalyticsResult<Option<PathRubric>>;
}

/// The bundle handed to the coaching-prompt assembler and dashboard layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingContext {
    /// Subject user.
    pub user_id: Uuid,
    /// The local "today" the context was computed against.
    pub generated_for: NaiveDate,
    /// Requested window length.
    pub window_days: u32,
    /// Today's score, when today has been logged.
    pub today_score: Option<ScoreResult>,
    /// Streak statistics.
    pub streaks: StreakState,
    /// Window-scoped metrics.
    pub metrics: MetricsReport,
    /// Psychological classification.
    pub psychology: PsychologyProfile,
}

/// Assembles a [`CoachingContext`] from external stores and the pure
/// pipeline stages. Stateless beyond injected read-only configuration;
/// construct freely per call or share across users.
pub struct CoachingContextAssembler<E, R> {
    entries: E,
    rubrics: R,
    config: AnalyticsConfig,
}

impl<E: EntryStore, R: RubricStore> CoachingContextAssembler<E, R> {
    /// Assembler with default configuration.
    #[must_use]
    pub fn new(entries: E, rubrics: R) -> Self {
        Self::with_config(entries, rubrics, AnalyticsConfig::default())
    }

    /// Assembler with custom configuration.
    #[must_use]
    pub const fn with_config(entries: E, rubrics: R, config: AnalyticsConfig) -> Self {
        Self {
            entries,
            rubrics,
            config,
        }
    }

    /// Build the coaching context for one user as of their local date.
    ///
    /// Runs score, streak, aggregation, and classification strictly in
    /// sequence; each stage depends on the previous one's output.
    ///
    /// # Errors
    /// - [`AnalyticsError::InvalidWindow`] before any computation when
    ///   `window_days` is zero or exceeds the configured maximum.
    /// - [`AnalyticsError::NotFound`] when the rubric does not resolve.
    /// - [`AnalyticsError::Upstream`] when a store call fails; propagated
    ///   without retry, and never masked with a neutral profile.
    pub async fn assemble(
        &self,
        user_id: Uuid,
        today: NaiveDate,
        window_days: u32,
        rubric_name: &str,
    ) -> AnalyticsResult<CoachingContext> {
        let max = self.config.limits.max_window_days;
        if window_days == 0 || window_days > max {
            return Err(AnalyticsError::InvalidWindow {
                days: window_days,
                max,
            });
        }

        let rubric = self
            .rubrics
            .rubric(rubric_name)
            .await?
            .ok_or_else(|| AnalyticsError::NotFound {
                what: "rubric",
                id: rubric_name.to_owned(),
            })?;

        let lookback = u64::from(window_days.max(self.config.limits.streak_lookback_days));
        let from = today.checked_sub_days(Days::new(lookback)).unwrap_or(today);
        let history = self.entries.entries_in_range(user_id, from, today).await?;
        debug!(%user_id, window_days, records = history.len(), "assembling coaching context");

        let mut scored: Vec<ScoredRecord> = history
            .into_iter()
            .map(|record| {
                let score = ScoreCalculator::score(&record, &rubric);
                ScoredRecord { record, score }
            })
            .collect();
        scored.sort_by(|a, b| b.record.date.cmp(&a.record.date));

        let today_score = scored
            .iter()
            .find(|entry| entry.record.date == today)
            .map(|entry| entry.score.clone());

        let aggregator = MetricsAggregator::with_config(
            self.config.milestones.clone(),
            self.config.trend.clone(),
        );
        let metrics = aggregator.aggregate(&scored, window_days, today);

        let recent: Vec<ScoredRecord> =
            scored.iter().take(RECENT_ENTRY_LIMIT).cloned().collect();
        let classifier = PsychologyClassifier::with_config(self.config.classifier.clone());
        let psychology = classifier.classify(&metrics, &recent, &rubric);

        Ok(CoachingContext {
            user_id,
            generated_for: today,
            window_days,
            today_score,
            streaks: metrics.streaks,
            psychology,
            metrics,
        })
    }
}
