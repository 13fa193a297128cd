// ABOUTME: Integration tests for the coaching context assembler
// ABOUTME: Mocks the record and rubric stores, checks error propagation end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use sovereign_intelligence::classifier::{CoachingNeed, HabitPhase};
use sovereign_intelligence::config::PathRubric;
use sovereign_intelligence::context::{CoachingContextAssembler, EntryStore, RubricStore};
use sovereign_intelligence::errors::{AnalyticsError, AnalyticsResult};
use sovereign_intelligence::models::ActivityRecord;
use uuid::Uuid;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
}

/// In-memory record store; optionally fails every call.
struct MockEntries {
    rows: Vec<ActivityRecord>,
    unavailable: bool,
}

#[async_trait]
impl EntryStore for MockEntries {
    async fn entries_in_range(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AnalyticsResult<Vec<ActivityRecord>> {
        if self.unavailable {
            return Err(AnalyticsError::Upstream("connection refused".into()));
        }
        Ok(self
            .rows
            .iter()
            .filter(|row| row.user_id == user_id && row.date >= from && row.date <= to)
            .cloned()
            .collect())
    }
}

/// Rubric store backed by the built-in rubrics.
struct MockRubrics;

#[async_trait]
impl RubricStore for MockRubrics {
    async fn rubric(&self, name: &str) -> AnalyticsResult<Option<PathRubric>> {
        Ok(match name {
            "balanced" => Some(PathRubric::balanced()),
            "financial" => Some(PathRubric::financial()),
            _ => None,
        })
    }
}

fn logged_day(user_id: Uuid, date: NaiveDate) -> ActivityRecord {
    let mut record = ActivityRecord::new(user_id, date);
    record.meditated = true;
    record.meals_cooked = 2;
    record.exercise_minutes = 30;
    record
}

#[tokio::test]
async fn assembles_full_context_for_an_active_user() {
    let user_id = Uuid::new_v4();
    let rows: Vec<ActivityRecord> = (0..10)
        .map(|back| logged_day(user_id, today().checked_sub_days(Days::new(back)).unwrap()))
        .collect();
    let assembler = CoachingContextAssembler::new(
        MockEntries {
            rows,
            unavailable: false,
        },
        MockRubrics,
    );

    let context = assembler
        .assemble(user_id, today(), 30, "balanced")
        .await
        .unwrap();

    assert_eq!(context.user_id, user_id);
    assert_eq!(context.generated_for, today());
    assert_eq!(context.window_days, 30);
    assert_eq!(context.streaks.current, 10);
    assert_eq!(context.metrics.records_in_window, 10);
    // Today was logged, so today's score is present and positive.
    let today_score = context.today_score.unwrap();
    assert!(today_score.total > 0.0);
}

#[tokio::test]
async fn unlogged_today_leaves_today_score_empty() {
    let user_id = Uuid::new_v4();
    let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
    let assembler = CoachingContextAssembler::new(
        MockEntries {
            rows: vec![logged_day(user_id, yesterday)],
            unavailable: false,
        },
        MockRubrics,
    );

    let context = assembler
        .assemble(user_id, today(), 30, "balanced")
        .await
        .unwrap();
    assert!(context.today_score.is_none());
    assert_eq!(context.streaks.current, 1);
}

#[tokio::test]
async fn zero_window_is_rejected_before_any_computation() {
    let assembler = CoachingContextAssembler::new(
        MockEntries {
            rows: Vec::new(),
            unavailable: true, // would fail if the store were reached
        },
        MockRubrics,
    );

    let error = assembler
        .assemble(Uuid::new_v4(), today(), 0, "balanced")
        .await
        .unwrap_err();
    assert!(matches!(error, AnalyticsError::InvalidWindow { days: 0, .. }));
}

#[tokio::test]
async fn oversized_window_is_rejected() {
    let assembler = CoachingContextAssembler::new(
        MockEntries {
            rows: Vec::new(),
            unavailable: false,
        },
        MockRubrics,
    );

    let error = assembler
        .assemble(Uuid::new_v4(), today(), 100_000, "balanced")
        .await
        .unwrap_err();
    assert!(matches!(error, AnalyticsError::InvalidWindow { .. }));
}

#[tokio::test]
async fn unknown_rubric_is_not_found() {
    let assembler = CoachingContextAssembler::new(
        MockEntries {
            rows: Vec::new(),
            unavailable: false,
        },
        MockRubrics,
    );

    let error = assembler
        .assemble(Uuid::new_v4(), today(), 30, "astral")
        .await
        .unwrap_err();
    assert!(matches!(error, AnalyticsError::NotFound { what: "rubric", .. }));
}

#[tokio::test]
async fn store_failure_propagates_instead_of_defaulting() {
    let assembler = CoachingContextAssembler::new(
        MockEntries {
            rows: Vec::new(),
            unavailable: true,
        },
        MockRubrics,
    );

    let error = assembler
        .assemble(Uuid::new_v4(), today(), 30, "balanced")
        .await
        .unwrap_err();
    assert!(matches!(error, AnalyticsError::Upstream(_)));
}

#[tokio::test]
async fn brand_new_user_gets_formation_education_profile() {
    let assembler = CoachingContextAssembler::new(
        MockEntries {
            rows: Vec::new(),
            unavailable: false,
        },
        MockRubrics,
    );

    let context = assembler
        .assemble(Uuid::new_v4(), today(), 30, "balanced")
        .await
        .unwrap();

    assert!(context.metrics.average_score.abs() < f64::EPSILON);
    assert_eq!(context.streaks.current, 0);
    assert_eq!(context.psychology.habit_phase, HabitPhase::Formation);
    assert_eq!(context.psychology.coaching_need, CoachingNeed::Education);
}
