// ABOUTME: Unit tests for streak calculation and the one-day grace rule
// ABOUTME: Covers grace expiry, gaps, duplicate dates, and longest-run scanning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Days, NaiveDate};
use sovereign_intelligence::models::ActivityRecord;
use sovereign_intelligence::streaks::StreakCalculator;
use uuid::Uuid;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
}

fn record_on(date: NaiveDate) -> ActivityRecord {
    ActivityRecord::new(Uuid::new_v4(), date)
}

/// Records on each of the `len` consecutive days ending at `end`.
fn run_ending(end: NaiveDate, len: u64) -> Vec<ActivityRecord> {
    (0..len)
        .map(|back| record_on(end.checked_sub_days(Days::new(back)).unwrap()))
        .collect()
}

#[test]
fn empty_history_has_no_streaks() {
    let state = StreakCalculator::streaks(&[], today());
    assert_eq!(state.current, 0);
    assert_eq!(state.longest, 0);
    assert_eq!(state.total_days_tracked, 0);
}

#[test]
fn five_consecutive_days_ending_yesterday() {
    let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
    let state = StreakCalculator::streaks(&run_ending(yesterday, 5), today());
    assert_eq!(state.current, 5);
    assert_eq!(state.longest, 5);
}

#[test]
fn grace_window_covers_an_unlogged_today() {
    let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
    let state = StreakCalculator::streaks(&run_ending(yesterday, 3), today());
    assert!(state.current > 0);
}

#[test]
fn streak_resets_once_two_days_pass() {
    let two_ago = today().checked_sub_days(Days::new(2)).unwrap();
    let state = StreakCalculator::streaks(&run_ending(two_ago, 10), today());
    assert_eq!(state.current, 0);
    assert_eq!(state.longest, 10);
}

#[test]
fn longest_streak_found_anywhere_in_history() {
    // A 10-day run a month back, then a fresh 3-day run ending today.
    let old_end = today().checked_sub_days(Days::new(30)).unwrap();
    let mut history = run_ending(old_end, 10);
    history.extend(run_ending(today(), 3));

    let state = StreakCalculator::streaks(&history, today());
    assert_eq!(state.current, 3);
    assert_eq!(state.longest, 10);
    assert_eq!(state.total_days_tracked, 13);
}

#[test]
fn longest_is_never_below_current() {
    let state = StreakCalculator::streaks(&run_ending(today(), 7), today());
    assert!(state.longest >= state.current);
    assert_eq!(state.current, 7);
}

#[test]
fn duplicate_dates_collapse_to_one_day() {
    let mut history = run_ending(today(), 4);
    history.push(record_on(today()));
    history.push(record_on(today().checked_sub_days(Days::new(1)).unwrap()));

    let state = StreakCalculator::streaks(&history, today());
    assert_eq!(state.current, 4);
    assert_eq!(state.total_days_tracked, 4);
}

#[test]
fn gap_inside_history_breaks_the_walk() {
    // Logged today, yesterday, then a hole, then three older days.
    let mut history = run_ending(today(), 2);
    let older_end = today().checked_sub_days(Days::new(3)).unwrap();
    history.extend(run_ending(older_end, 3));

    let state = StreakCalculator::streaks(&history, today());
    assert_eq!(state.current, 2);
    assert_eq!(state.longest, 3);
}
