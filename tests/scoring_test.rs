// ABOUTME: Unit tests for daily score calculation under path rubrics
// ABOUTME: Covers clamping, inverted flags, caps, and permissive rubric defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use sovereign_intelligence::config::PathRubric;
use sovereign_intelligence::models::{ActivityField, ActivityRecord};
use sovereign_intelligence::scoring::ScoreCalculator;
use uuid::Uuid;

fn day() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

fn empty_record() -> ActivityRecord {
    ActivityRecord::new(Uuid::new_v4(), day())
}

fn full_record() -> ActivityRecord {
    let mut record = empty_record();
    record.meals_cooked = 3;
    record.exercise_minutes = 60;
    record.strength_training = true;
    record.no_spend = true;
    record.btc_purchase = true;
    record.meditated = true;
    record.gratitude = true;
    record.learned = true;
    record.environmental_action = true;
    record
}

#[test]
fn all_zero_record_scores_zero_under_every_builtin_rubric() {
    let record = empty_record();
    for rubric in [
        PathRubric::balanced(),
        PathRubric::financial(),
        PathRubric::physical(),
        PathRubric::mental(),
    ] {
        let result = ScoreCalculator::score(&record, &rubric);
        assert!(
            result.total.abs() < f64::EPSILON,
            "rubric {} scored {}",
            rubric.name,
            result.total
        );
        assert!(result.breakdown.is_empty());
    }
}

#[test]
fn total_stays_within_display_range() {
    let record = full_record();
    for rubric in [
        PathRubric::balanced(),
        PathRubric::financial(),
        PathRubric::physical(),
        PathRubric::mental(),
    ] {
        let result = ScoreCalculator::score(&record, &rubric);
        assert!(result.total >= 0.0 && result.total <= 100.0);
    }
}

#[test]
fn maximal_rubric_clamps_at_ceiling() {
    let rubric = PathRubric::named("oversized")
        .with_flag(ActivityField::Meditated, 90.0)
        .with_flag(ActivityField::Gratitude, 90.0);
    let mut record = empty_record();
    record.meditated = true;
    record.gratitude = true;

    let result = ScoreCalculator::score(&record, &rubric);
    assert!((result.total - 100.0).abs() < f64::EPSILON);
    // Breakdown keeps the un-clamped contributions.
    let sum: f64 = result.breakdown.values().sum();
    assert!((sum - 180.0).abs() < f64::EPSILON);
}

#[test]
fn breakdown_sum_clamped_equals_total() {
    let record = full_record();
    let result = ScoreCalculator::score(&record, &PathRubric::balanced());
    let sum: f64 = result.breakdown.values().sum();
    assert!((sum.clamp(0.0, 100.0) - result.total).abs() < 1e-9);
}

#[test]
fn junk_food_contributes_strictly_negative_delta() {
    let mut record = empty_record();
    record.junk_food = true;
    record.meditated = true;

    let result = ScoreCalculator::score(&record, &PathRubric::balanced());
    let junk = result.breakdown.get("junk_food").copied().unwrap();
    assert!(junk < 0.0);
    // Meditation 10 minus junk 10 nets to zero.
    assert!(result.total.abs() < f64::EPSILON);
}

#[test]
fn negative_total_floors_at_zero() {
    let mut record = empty_record();
    record.junk_food = true;

    let result = ScoreCalculator::score(&record, &PathRubric::balanced());
    assert!(result.total.abs() < f64::EPSILON);
    assert!(result.breakdown.get("junk_food").copied().unwrap() < 0.0);
}

#[test]
fn count_contributions_cap_at_rubric_units() {
    let rubric = PathRubric::named("capped").with_count(ActivityField::ExerciseMinutes, 1.0, 40);
    let mut record = empty_record();
    record.exercise_minutes = 120;

    let result = ScoreCalculator::score(&record, &rubric);
    assert!((result.total - 40.0).abs() < f64::EPSILON);
}

#[test]
fn fields_without_rubric_rules_are_silently_ignored() {
    let rubric = PathRubric::named("meditation_only").with_flag(ActivityField::Meditated, 10.0);
    let mut record = empty_record();
    record.exercise_minutes = 40;
    record.strength_training = true;

    let result = ScoreCalculator::score(&record, &rubric);
    assert!(result.total.abs() < f64::EPSILON);
    assert!(result.breakdown.is_empty());
}

#[test]
fn builtin_rubrics_reward_their_path_emphasis() {
    let mut saver = empty_record();
    saver.no_spend = true;
    saver.btc_purchase = true;

    let financial = ScoreCalculator::score(&saver, &PathRubric::financial()).total;
    let physical = ScoreCalculator::score(&saver, &PathRubric::physical()).total;
    assert!(financial > physical);
}
