// ABOUTME: Path rubric configuration mapping activity fields to point rules
// ABOUTME: Ships built-in financial, physical, mental, and balanced rubrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

//! Swappable scoring rubrics.
//!
//! A rubric is data, not code: each activity field maps to a point rule,
//! and rubric authors may omit any field they consider irrelevant, which
//! acts as a silent zero weight. Rubrics can change per user and over
//! time; historical scores are never recomputed on a switch.

use crate::models::ActivityField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point rule for a count-based field: `min(count, cap_units) * per_unit`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountRule {
    /// Points awarded per counted unit.
    pub per_unit: f64,
    /// Units beyond this cap earn nothing.
    pub cap_units: u32,
}

/// Point rule for a boolean field: a flat award when the flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlagRule {
    /// Flat points when the flag is true.
    pub award: f64,
    /// Inverted fields subtract the award instead (junk food).
    pub inverted: bool,
}

/// A named scoring rubric for one sovereignty path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRubric {
    /// Rubric name, as stored in the rubric store.
    pub name: String,
    /// Rules for count-based fields.
    pub count_rules: BTreeMap<ActivityField, CountRule>,
    /// Rules for boolean fields.
    pub flag_rules: BTreeMap<ActivityField, FlagRule>,
}

impl PathRubric {
    /// Empty rubric with the given name; every field zero-weighted.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            count_rules: BTreeMap::new(),
            flag_rules: BTreeMap::new(),
        }
    }

    /// Add a count rule.
    #[must_use]
    pub fn with_count(mut self, field: ActivityField, per_unit: f64, cap_units: u32) -> Self {
        self.count_rules.insert(field, CountRule { per_unit, cap_units });
        self
    }

    /// Add a flat flag award.
    #[must_use]
    pub fn with_flag(mut self, field: ActivityField, award: f64) -> Self {
        self.flag_rules.insert(
            field,
            FlagRule {
                award,
                inverted: false,
            },
        );
        self
    }

    /// Add an inverted flag rule (the flag subtracts points).
    #[must_use]
    pub fn with_inverted_flag(mut self, field: ActivityField, award: f64) -> Self {
        self.flag_rules.insert(
            field,
            FlagRule {
                award,
                inverted: true,
            },
        );
        self
    }

    /// Fields this rubric rewards, in canonical order.
    ///
    /// A field is rewarded when its rule can add points. For inverted
    /// rules, avoiding the flag is what the rubric is paying for.
    #[must_use]
    pub fn rewarded_fields(&self) -> Vec<ActivityField> {
        ActivityField::ALL
            .into_iter()
            .filter(|field| {
                self.count_rules
                    .get(field)
                    .is_some_and(|rule| rule.per_unit > 0.0)
                    || self.flag_rules.get(field).is_some_and(|rule| rule.award > 0.0)
            })
            .collect()
    }

    /// Even-handed rubric covering every tracked activity.
    #[must_use]
    pub fn balanced() -> Self {
        Self::named("balanced")
            .with_count(ActivityField::MealsCooked, 5.0, 3)
            .with_count(ActivityField::ExerciseMinutes, 0.5, 40)
            .with_flag(ActivityField::StrengthTraining, 15.0)
            .with_flag(ActivityField::NoSpend, 10.0)
            .with_flag(ActivityField::BtcPurchase, 15.0)
            .with_flag(ActivityField::Meditated, 10.0)
            .with_flag(ActivityField::Gratitude, 5.0)
            .with_flag(ActivityField::Learned, 5.0)
            .with_flag(ActivityField::EnvironmentalAction, 5.0)
            .with_inverted_flag(ActivityField::JunkFood, 10.0)
    }

    /// Financial-path rubric: spending discipline and investing dominate.
    #[must_use]
    pub fn financial() -> Self {
        Self::named("financial")
            .with_flag(ActivityField::NoSpend, 25.0)
            .with_flag(ActivityField::BtcPurchase, 30.0)
            .with_count(ActivityField::MealsCooked, 5.0, 3)
            .with_count(ActivityField::ExerciseMinutes, 0.25, 40)
            .with_flag(ActivityField::Learned, 10.0)
            .with_flag(ActivityField::Meditated, 10.0)
            .with_inverted_flag(ActivityField::JunkFood, 10.0)
    }

    /// Physical-path rubric: training and nutrition dominate.
    #[must_use]
    pub fn physical() -> Self {
        Self::named("physical")
            .with_count(ActivityField::ExerciseMinutes, 1.0, 40)
            .with_flag(ActivityField::StrengthTraining, 20.0)
            .with_count(ActivityField::MealsCooked, 5.0, 3)
            .with_flag(ActivityField::Meditated, 10.0)
            .with_flag(ActivityField::NoSpend, 5.0)
            .with_flag(ActivityField::Gratitude, 5.0)
            .with_flag(ActivityField::Learned, 5.0)
            .with_inverted_flag(ActivityField::JunkFood, 15.0)
    }

    /// Mental/spiritual-path rubric: inner practice dominates.
    #[must_use]
    pub fn mental() -> Self {
        Self::named("mental")
            .with_flag(ActivityField::Meditated, 25.0)
            .with_flag(ActivityField::Gratitude, 20.0)
            .with_flag(ActivityField::Learned, 20.0)
            .with_count(ActivityField::ExerciseMinutes, 0.5, 40)
            .with_flag(ActivityField::EnvironmentalAction, 10.0)
            .with_flag(ActivityField::StrengthTraining, 5.0)
            .with_inverted_flag(ActivityField::JunkFood, 10.0)
    }
}

impl Default for PathRubric {
    fn default() -> Self {
        Self::balanced()
    }
}
