// ABOUTME: Milestone ladder configuration for cumulative Bitcoin accumulation
// ABOUTME: Ordered increasing thresholds with next-rung and achieved-count lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

//! Milestone ladder over cumulative accumulated Bitcoin units.
//!
//! The ladder is configuration, not code: rungs are loaded data and the
//! default ladder below is only a starting point.

use serde::{Deserialize, Serialize};

/// One rung of the ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Display identifier for the rung.
    pub name: String,
    /// Cumulative units required to cross it.
    pub target_units: f64,
}

impl Milestone {
    fn new(name: &str, target_units: f64) -> Self {
        Self {
            name: name.to_owned(),
            target_units,
        }
    }
}

/// Ordered ladder of increasing cumulative thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneLadder {
    rungs: Vec<Milestone>,
}

impl MilestoneLadder {
    /// Build a ladder from arbitrary rungs.
    ///
    /// Rungs are sorted ascending and rungs that do not strictly increase
    /// the threshold are dropped, so lookups can assume monotonicity.
    #[must_use]
    pub fn new(mut rungs: Vec<Milestone>) -> Self {
        rungs.retain(|rung| rung.target_units.is_finite() && rung.target_units > 0.0);
        rungs.sort_by(|a, b| a.target_units.total_cmp(&b.target_units));
        rungs.dedup_by(|next, prev| next.target_units <= prev.target_units);
        Self { rungs }
    }

    /// The rungs, ascending.
    #[must_use]
    pub fn rungs(&self) -> &[Milestone] {
        &self.rungs
    }

    /// Smallest rung strictly above the current cumulative total.
    #[must_use]
    pub fn next_after(&self, total_units: f64) -> Option<&Milestone> {
        self.rungs
            .iter()
            .find(|rung| rung.target_units > total_units)
    }

    /// Number of rungs at or below the current cumulative total.
    #[must_use]
    pub fn achieved_count(&self, total_units: f64) -> u32 {
        let achieved = self
            .rungs
            .iter()
            .filter(|rung| rung.target_units <= total_units)
            .count();
        u32::try_from(achieved).unwrap_or(u32::MAX)
    }
}

impl Default for MilestoneLadder {
    fn default() -> Self {
        Self::new(vec![
            Milestone::new("first_sats", 0.001),
            Milestone::new("one_hundredth", 0.01),
            Milestone::new("quarter_tenth", 0.025),
            Milestone::new("half_tenth", 0.05),
            Milestone::new("one_tenth", 0.1),
            Milestone::new("quarter_coin", 0.25),
            Milestone::new("half_coin", 0.5),
            Milestone::new("whole_coin", 1.0),
        ])
    }
}
