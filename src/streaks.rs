// ABOUTME: Consecutive-day streak calculation with a one-day grace window
// ABOUTME: Computes current streak, longest streak ever, and distinct days tracked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

//! Streak statistics over a user's full history.
//!
//! The current streak tolerates one day of grace: a user who has not
//! logged *today* still gets credit through yesterday. The longest streak
//! is an independent scan over the whole history, not limited to the
//! trailing run.

use crate::models::ActivityRecord;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Streak statistics for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Length of the streak running into today or yesterday; zero once the
    /// grace window is exhausted.
    pub current: u32,
    /// Longest run of consecutive calendar dates anywhere in the history.
    /// Always >= `current`.
    pub longest: u32,
    /// Distinct calendar dates with a logged record.
    pub total_days_tracked: u32,
}

/// Stateless streak calculator.
pub struct StreakCalculator;

impl StreakCalculator {
    /// Compute streak statistics as of the caller-supplied local date.
    ///
    /// `today` must be the user's local calendar date, not the server's
    /// UTC date. Duplicate dates are an upstream invariant violation and
    /// collapse to a single day here.
    #[must_use]
    pub fn streaks(history: &[ActivityRecord], today: NaiveDate) -> StreakState {
        let mut dates: Vec<NaiveDate> = history.iter().map(|record| record.date).collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.dedup();

        let Some(&most_recent) = dates.first() else {
            return StreakState::default();
        };

        let grace_cutoff = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        let current = if most_recent < grace_cutoff {
            0
        } else {
            Self::run_length_from(&dates, 0)
        };

        let longest = Self::longest_run(&dates);
        let total = u32::try_from(dates.len()).unwrap_or(u32::MAX);

        StreakState {
            current,
            longest: longest.max(current),
            total_days_tracked: total,
        }
    }

    /// Length of the consecutive-date run starting at `start` in a
    /// descending, de-duplicated date list.
    fn run_length_from(dates: &[NaiveDate], start: usize) -> u32 {
        let mut run = 0_u32;
        let mut expected = match dates.get(start) {
            Some(&date) => date,
            None => return 0,
        };

        for &date in &dates[start..] {
            if date != expected {
                break;
            }
            run = run.saturating_add(1);
            let Some(previous) = expected.checked_sub_days(Days::new(1)) else {
                break;
            };
            expected = previous;
        }
        run
    }

    /// Maximum consecutive-date run length anywhere in the history.
    fn longest_run(dates: &[NaiveDate]) -> u32 {
        let mut longest = 0_u32;
        let mut index = 0;
        while index < dates.len() {
            let run = Self::run_length_from(dates, index);
            longest = longest.max(run);
            index += run.max(1) as usize;
        }
        longest
    }
}
