// ABOUTME: Unified error types for the behavioral analytics pipeline
// ABOUTME: Distinguishes fatal request errors from per-record degradation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sovereign Intelligence

//! Error taxonomy for the analytics core.
//!
//! Fatal errors (`NotFound`, `InvalidWindow`, `Upstream`) abort the whole
//! request and must surface to the caller; a `MalformedRecord` only rejects
//! the offending row, which the aggregator skips with a logged warning.

use chrono::NaiveDate;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors produced by the analytics pipeline.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A referenced profile or rubric does not exist.
    #[error("{what} not found: {id}")]
    NotFound {
        /// Kind of missing resource ("rubric", "profile", ...).
        what: &'static str,
        /// Identifier that failed to resolve.
        id: String,
    },

    /// The requested analysis window is non-positive or absurdly large.
    #[error("invalid analysis window: {days} days (allowed 1..={max})")]
    InvalidWindow {
        /// The rejected window length.
        days: u32,
        /// The configured upper bound.
        max: u32,
    },

    /// A stored record carries an out-of-range field.
    ///
    /// The aggregator treats this as recoverable: the record is excluded
    /// and the rest of the window is still served.
    #[error("malformed record for {date}: {reason}")]
    MalformedRecord {
        /// Calendar date of the rejected record.
        date: NaiveDate,
        /// Which field violated its bound.
        reason: String,
    },

    /// The external record store failed. Propagated as-is; retry policy
    /// belongs to the caller, and a neutral default profile must never be
    /// substituted.
    #[error("record store unavailable: {0}")]
    Upstream(String),
}

impl AnalyticsError {
    /// Whether the error only invalidates a single record rather than the
    /// whole request.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}
