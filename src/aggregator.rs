// ABOUTME: Window-scoped metrics aggregation over scored daily records
// ABOUTME: Averages, category participation, BTC progress, weekday split, trend label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

//! Rolling statistics over a window of scored records.
//!
//! The window is the N calendar days ending at `today`. Malformed records
//! are skipped with a logged warning rather than failing the whole report;
//! streak statistics are computed over the full (valid) history, not just
//! the window, because the longest streak predates any display window.

use crate::config::{Milestone, MilestoneLadder, TrendConfig};
use crate::models::{ActivityField, ScoredRecord};
use crate::streaks::{StreakCalculator, StreakState};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Direction of the score trend across the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Later half of the window scores meaningfully higher.
    Improving,
    /// No meaningful difference, or insufficient signal.
    Stable,
    /// Later half of the window scores meaningfully lower.
    Declining,
}

/// Aggregate statistics for one user over one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Requested window length in days.
    pub window_days: u32,
    /// Valid records that fell inside the window.
    pub records_in_window: u32,
    /// Malformed records excluded from the window.
    pub records_skipped: u32,
    /// Days since the most recent valid record anywhere in the history.
    pub days_since_last_entry: Option<i64>,
    /// Mean daily score over the window (0 when empty).
    pub average_score: f64,
    /// Best daily score in the window.
    pub best_score: f64,
    /// Worst daily score in the window.
    pub worst_score: f64,
    /// Days with any record, as a percentage of the window.
    pub logging_consistency: f64,
    /// Active-day count per category.
    pub category_days: BTreeMap<String, u32>,
    /// Active-day percentage per category, over the window length.
    pub category_rates: BTreeMap<String, f64>,
    /// Total exercise minutes in the window.
    pub total_exercise_minutes: u64,
    /// Mean cooked meals per logged day.
    pub average_meals_per_day: f64,
    /// Bitcoin units accumulated in the window.
    pub btc_total_units: f64,
    /// Fiat invested in the window.
    pub btc_total_fiat: f64,
    /// Days with a Bitcoin purchase.
    pub investment_days: u32,
    /// Investment days over the *requested* window length, as a percentage.
    /// A short history therefore reads as realistically low, never 100%.
    pub investment_consistency: f64,
    /// Next milestone above the cumulative total, if any remain.
    pub next_milestone: Option<Milestone>,
    /// Milestones already crossed.
    pub milestones_achieved: u32,
    /// Mean score on weekdays (Mon-Fri).
    pub weekday_average: f64,
    /// Mean score on weekends (Sat-Sun).
    pub weekend_average: f64,
    /// Day of week with the highest mean score, ties to the earliest day.
    pub best_day: Option<Weekday>,
    /// Day of week with the lowest mean score, ties to the earliest day.
    pub worst_day: Option<Weekday>,
    /// Trend label for the window.
    pub trend: TrendDirection,
    /// Streak statistics over the full history.
    pub streaks: StreakState,
}

/// Aggregation engine with injected configuration.
pub struct MetricsAggregator {
    ladder: MilestoneLadder,
    trend: TrendConfig,
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsAggregator {
    /// Aggregator with the default ladder and trend parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MilestoneLadder::default(), TrendConfig::default())
    }

    /// Aggregator with custom configuration.
    #[must_use]
    pub const fn with_config(ladder: MilestoneLadder, trend: TrendConfig) -> Self {
        Self { ladder, trend }
    }

    /// Aggregate scored history into a window-scoped report.
    ///
    /// `history` may span more than the window; windowed statistics only
    /// see records dated within the N days ending at `today`, while streak
    /// fields consider everything valid. The computation is a pure
    /// function of its inputs: identical calls yield identical reports.
    #[must_use]
    pub fn aggregate(
        &self,
        history: &[ScoredRecord],
        window_days: u32,
        today: NaiveDate,
    ) -> MetricsReport {
        let mut skipped = 0_u32;
        let valid: Vec<&ScoredRecord> = history
            .iter()
            .filter(|scored| match scored.record.validate() {
                Ok(()) => true,
                Err(error) => {
                    warn!(date = %scored.record.date, %error, "skipping malformed record");
                    skipped = skipped.saturating_add(1);
                    false
                }
            })
            .collect();

        // N days ending at `today`: lower bound exclusive keeps day counts <= N.
        let window_start = today.checked_sub_days(Days::new(u64::from(window_days)));
        let mut windowed: Vec<&ScoredRecord> = valid
            .iter()
            .copied()
            .filter(|scored| {
                scored.record.date <= today
                    && window_start.is_none_or(|start| scored.record.date > start)
            })
            .collect();
        windowed.sort_by_key(|scored| scored.record.date);

        debug!(
            window_days,
            records = windowed.len(),
            skipped,
            "aggregating metrics window"
        );

        let full_records: Vec<_> = valid.iter().map(|scored| scored.record.clone()).collect();
        let streaks = StreakCalculator::streaks(&full_records, today);
        let days_since_last_entry = full_records
            .iter()
            .map(|record| record.date)
            .max()
            .map(|last| (today - last).num_days());

        let scores: Vec<f64> = windowed.iter().map(|scored| scored.score.total).collect();
        let records_in_window = u32::try_from(windowed.len()).unwrap_or(u32::MAX);
        let best_score = scores.iter().copied().fold(None, fold_max).unwrap_or(0.0);
        let worst_score = scores.iter().copied().fold(None, fold_min).unwrap_or(0.0);

        let (category_days, category_rates) = Self::category_stats(&windowed, window_days);
        let (weekday_average, weekend_average) = Self::weekday_weekend_split(&windowed);
        let (best_day, worst_day) = Self::best_worst_day(&windowed);

        let btc_total_units: f64 = windowed
            .iter()
            .filter_map(|scored| scored.record.btc_amount_units)
            .sum();
        let btc_total_fiat: f64 = windowed
            .iter()
            .filter_map(|scored| scored.record.btc_amount_fiat)
            .sum();
        let investment_days = u32::try_from(
            windowed
                .iter()
                .filter(|scored| scored.record.btc_purchase)
                .count(),
        )
        .unwrap_or(u32::MAX);

        MetricsReport {
            window_days,
            records_in_window,
            records_skipped: skipped,
            days_since_last_entry,
            average_score: mean(&scores),
            best_score,
            worst_score,
            logging_consistency: window_rate(records_in_window, window_days),
            category_days,
            category_rates,
            total_exercise_minutes: windowed
                .iter()
                .map(|scored| u64::from(scored.record.exercise_minutes))
                .sum(),
            average_meals_per_day: mean(
                &windowed
                    .iter()
                    .map(|scored| f64::from(scored.record.meals_cooked))
                    .collect::<Vec<_>>(),
            ),
            btc_total_units,
            btc_total_fiat,
            investment_days,
            investment_consistency: window_rate(investment_days, window_days),
            next_milestone: self.ladder.next_after(btc_total_units).cloned(),
            milestones_achieved: self.ladder.achieved_count(btc_total_units),
            weekday_average,
            weekend_average,
            best_day,
            worst_day,
            trend: self.trend_label(&scores),
            streaks,
        }
    }

    /// Half-split trend comparison over chronologically ordered scores.
    fn trend_label(&self, scores: &[f64]) -> TrendDirection {
        if scores.len() < self.trend.min_records {
            return TrendDirection::Stable;
        }

        let half = scores.len() / 2;
        let earlier = mean(&scores[..half]);
        let later = mean(&scores[half..]);

        if later > earlier * (1.0 + self.trend.relative_threshold) {
            TrendDirection::Improving
        } else if later < earlier * (1.0 - self.trend.relative_threshold) {
            TrendDirection::Declining
        } else {
            TrendDirection::Stable
        }
    }

    /// Active-day counts and window-relative rates per category.
    fn category_stats(
        windowed: &[&ScoredRecord],
        window_days: u32,
    ) -> (BTreeMap<String, u32>, BTreeMap<String, f64>) {
        let mut days = BTreeMap::new();
        let mut rates = BTreeMap::new();

        for field in ActivityField::ALL {
            let count = u32::try_from(
                windowed
                    .iter()
                    .filter(|scored| scored.record.category_active(field))
                    .count(),
            )
            .unwrap_or(u32::MAX);
            days.insert(field.category_key().to_owned(), count);
            rates.insert(
                field.category_key().to_owned(),
                window_rate(count, window_days),
            );
        }

        (days, rates)
    }

    /// Mean score on Mon-Fri vs Sat-Sun.
    fn weekday_weekend_split(windowed: &[&ScoredRecord]) -> (f64, f64) {
        let weekday: Vec<f64> = windowed
            .iter()
            .filter(|scored| !is_weekend(scored.record.date.weekday()))
            .map(|scored| scored.score.total)
            .collect();
        let weekend: Vec<f64> = windowed
            .iter()
            .filter(|scored| is_weekend(scored.record.date.weekday()))
            .map(|scored| scored.score.total)
            .collect();
        (mean(&weekday), mean(&weekend))
    }

    /// Single best and worst day of week by mean score, Monday-first
    /// iteration so ties resolve to the earliest day.
    fn best_worst_day(windowed: &[&ScoredRecord]) -> (Option<Weekday>, Option<Weekday>) {
        const WEEK: [Weekday; 7] = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];

        let mut best: Option<(Weekday, f64)> = None;
        let mut worst: Option<(Weekday, f64)> = None;

        for day in WEEK {
            let day_scores: Vec<f64> = windowed
                .iter()
                .filter(|scored| scored.record.date.weekday() == day)
                .map(|scored| scored.score.total)
                .collect();
            if day_scores.is_empty() {
                continue;
            }
            let day_mean = mean(&day_scores);
            if best.is_none_or(|(_, score)| day_mean > score) {
                best = Some((day, day_mean));
            }
            if worst.is_none_or(|(_, score)| day_mean < score) {
                worst = Some((day, day_mean));
            }
        }

        (best.map(|(day, _)| day), worst.map(|(day, _)| day))
    }
}

fn fold_max(acc: Option<f64>, value: f64) -> Option<f64> {
    Some(acc.map_or(value, |best| best.max(value)))
}

fn fold_min(acc: Option<f64>, value: f64) -> Option<f64> {
    Some(acc.map_or(value, |worst| worst.min(value)))
}

/// Arithmetic mean; zero for an empty slice (no divide-by-zero).
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Day count over the requested window length, as a clamped percentage.
fn window_rate(days: u32, window_days: u32) -> f64 {
    if window_days == 0 {
        return 0.0;
    }
    (f64::from(days) / f64::from(window_days) * 100.0).clamp(0.0, 100.0)
}

/// Saturday or Sunday.
const fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}
