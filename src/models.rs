// ABOUTME: Core data model for daily sovereignty activity records
// ABOUTME: Defines activity fields, per-day records, validation bounds, and scored records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

//! Domain models shared by every pipeline stage.
//!
//! An [`ActivityRecord`] is one user's log for one local calendar day.
//! Records are produced by the entry-logging feature upstream and are
//! read-only inputs here; the pipeline never mutates or persists them.

use crate::errors::{AnalyticsError, AnalyticsResult};
use crate::scoring::ScoreResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound on cooked meals logged per day.
pub const MAX_MEALS_PER_DAY: u32 = 3;

/// Upper bound on exercise minutes per day (sanity cap, one calendar day).
pub const MAX_EXERCISE_MINUTES: u32 = 1440;

/// Every activity field a record can carry.
///
/// Count fields hold a bounded integer; flag fields are booleans.
/// `JunkFood` is the only inverted field: logging it subtracts points and
/// its *absence* is what counts as a clean-eating day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ActivityField {
    /// Home-cooked meals (0-3).
    MealsCooked,
    /// Minutes of exercise.
    ExerciseMinutes,
    /// Strength training session completed.
    StrengthTraining,
    /// Junk food eaten (inverted: subtracts points).
    JunkFood,
    /// No discretionary spending today.
    NoSpend,
    /// Bitcoin purchased today.
    BtcPurchase,
    /// Meditation practiced.
    Meditated,
    /// Gratitude practiced.
    Gratitude,
    /// Learned something new.
    Learned,
    /// Took an environmental action.
    EnvironmentalAction,
}

impl ActivityField {
    /// All fields, in canonical order.
    pub const ALL: [Self; 10] = [
        Self::MealsCooked,
        Self::ExerciseMinutes,
        Self::StrengthTraining,
        Self::JunkFood,
        Self::NoSpend,
        Self::BtcPurchase,
        Self::Meditated,
        Self::Gratitude,
        Self::Learned,
        Self::EnvironmentalAction,
    ];

    /// Stable key used in score breakdowns.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::MealsCooked => "meals_cooked",
            Self::ExerciseMinutes => "exercise_minutes",
            Self::StrengthTraining => "strength_training",
            Self::JunkFood => "junk_food",
            Self::NoSpend => "no_spend",
            Self::BtcPurchase => "btc_purchase",
            Self::Meditated => "meditated",
            Self::Gratitude => "gratitude",
            Self::Learned => "learned",
            Self::EnvironmentalAction => "environmental_action",
        }
    }

    /// Key used in per-category participation stats.
    ///
    /// Differs from [`Self::key`] where the reported category is not the raw
    /// field: junk food is reported as clean-eating days.
    #[must_use]
    pub const fn category_key(self) -> &'static str {
        match self {
            Self::MealsCooked => "home_cooking",
            Self::ExerciseMinutes => "exercise",
            Self::StrengthTraining => "strength_training",
            Self::JunkFood => "clean_eating",
            Self::NoSpend => "no_spend",
            Self::BtcPurchase => "investing",
            Self::Meditated => "meditation",
            Self::Gratitude => "gratitude",
            Self::Learned => "learning",
            Self::EnvironmentalAction => "environmental_action",
        }
    }

    /// Human-readable category label for risk/strength messages.
    #[must_use]
    pub const fn category_label(self) -> &'static str {
        match self {
            Self::MealsCooked => "home cooking",
            Self::ExerciseMinutes => "exercise",
            Self::StrengthTraining => "strength training",
            Self::JunkFood => "clean eating",
            Self::NoSpend => "spending discipline",
            Self::BtcPurchase => "investing",
            Self::Meditated => "meditation",
            Self::Gratitude => "gratitude",
            Self::Learned => "learning",
            Self::EnvironmentalAction => "environmental action",
        }
    }

    /// Whether this field carries an integer count rather than a flag.
    #[must_use]
    pub const fn is_count(self) -> bool {
        matches!(self, Self::MealsCooked | Self::ExerciseMinutes)
    }
}

/// One user's activity log for one local calendar day.
///
/// Exactly one record exists per (user, date); `date` is the user's local
/// calendar date, never a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Owning user.
    pub user_id: Uuid,
    /// Local calendar date of the log.
    pub date: NaiveDate,
    /// Home-cooked meals (0-3).
    pub meals_cooked: u32,
    /// Minutes of exercise.
    pub exercise_minutes: u32,
    /// Strength training done.
    pub strength_training: bool,
    /// Junk food eaten.
    pub junk_food: bool,
    /// No discretionary spending.
    pub no_spend: bool,
    /// Bitcoin purchased.
    pub btc_purchase: bool,
    /// Meditated.
    pub meditated: bool,
    /// Practiced gratitude.
    pub gratitude: bool,
    /// Learned something.
    pub learned: bool,
    /// Took environmental action.
    pub environmental_action: bool,
    /// Fiat amount of today's Bitcoin purchase, if any.
    pub btc_amount_fiat: Option<f64>,
    /// Bitcoin units of today's purchase, if any.
    pub btc_amount_units: Option<f64>,
}

impl ActivityRecord {
    /// Empty record for the given user and date; every field at its
    /// zero/false default.
    #[must_use]
    pub const fn new(user_id: Uuid, date: NaiveDate) -> Self {
        Self {
            user_id,
            date,
            meals_cooked: 0,
            exercise_minutes: 0,
            strength_training: false,
            junk_food: false,
            no_spend: false,
            btc_purchase: false,
            meditated: false,
            gratitude: false,
            learned: false,
            environmental_action: false,
            btc_amount_fiat: None,
            btc_amount_units: None,
        }
    }

    /// Count value for a count field; zero for flag fields.
    #[must_use]
    pub const fn count(&self, field: ActivityField) -> u32 {
        match field {
            ActivityField::MealsCooked => self.meals_cooked,
            ActivityField::ExerciseMinutes => self.exercise_minutes,
            _ => 0,
        }
    }

    /// Flag value for a boolean field; false for count fields.
    #[must_use]
    pub const fn flag(&self, field: ActivityField) -> bool {
        match field {
            ActivityField::StrengthTraining => self.strength_training,
            ActivityField::JunkFood => self.junk_food,
            ActivityField::NoSpend => self.no_spend,
            ActivityField::BtcPurchase => self.btc_purchase,
            ActivityField::Meditated => self.meditated,
            ActivityField::Gratitude => self.gratitude,
            ActivityField::Learned => self.learned,
            ActivityField::EnvironmentalAction => self.environmental_action,
            _ => false,
        }
    }

    /// Whether the day counts as active in the given category.
    ///
    /// Counts are active when nonzero; junk food is inverted (a clean day
    /// is the active state); other flags are active when set.
    #[must_use]
    pub const fn category_active(&self, field: ActivityField) -> bool {
        match field {
            ActivityField::MealsCooked | ActivityField::ExerciseMinutes => self.count(field) > 0,
            ActivityField::JunkFood => !self.junk_food,
            _ => self.flag(field),
        }
    }

    /// Check the record against its field bounds.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::MalformedRecord`] when a count exceeds its
    /// bound or a monetary amount is negative or non-finite.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.meals_cooked > MAX_MEALS_PER_DAY {
            return Err(self.malformed(format!(
                "meals_cooked {} exceeds {MAX_MEALS_PER_DAY}",
                self.meals_cooked
            )));
        }
        if self.exercise_minutes > MAX_EXERCISE_MINUTES {
            return Err(self.malformed(format!(
                "exercise_minutes {} exceeds {MAX_EXERCISE_MINUTES}",
                self.exercise_minutes
            )));
        }
        if let Some(fiat) = self.btc_amount_fiat {
            if !fiat.is_finite() || fiat < 0.0 {
                return Err(self.malformed(format!("btc_amount_fiat {fiat} out of range")));
            }
        }
        if let Some(units) = self.btc_amount_units {
            if !units.is_finite() || units < 0.0 {
                return Err(self.malformed(format!("btc_amount_units {units} out of range")));
            }
        }
        Ok(())
    }

    fn malformed(&self, reason: String) -> AnalyticsError {
        AnalyticsError::MalformedRecord {
            date: self.date,
            reason,
        }
    }
}

/// A record paired with its precomputed daily score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// The raw day record.
    pub record: ActivityRecord,
    /// Score of that day under the rubric in force.
    pub score: ScoreResult,
}
