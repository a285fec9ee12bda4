//! # Grading Report Module
//!
//! Defines the aggregate grading result and the response envelope handed to
//! the surrounding service for persistence and display.
//!
//! A [`GradingResult`] is constructed once per grading call and is immutable
//! thereafter: per-requirement details, totals, percentage, and the timing
//! metadata supplied by the caller. The engine never reads the clock itself,
//! so identical inputs serialize to identical results.

use crate::scorer;
use crate::types::GradingDetail;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timing metadata for one attempt, supplied by the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GradingTiming {
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

/// The full grading outcome for one attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradingResult {
    /// Sum of `points_possible` across all details.
    pub total_points: f64,
    /// Sum of `points_earned` across all details.
    pub earned_points: f64,
    /// `earned / total * 100`, rounded half-up to two decimals; 0 when
    /// `total_points` is 0.
    pub percentage: f64,
    pub details: Vec<GradingDetail>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl GradingResult {
    /// Assemble the result from graded details and caller-supplied timing.
    pub fn assemble(details: Vec<GradingDetail>, timing: GradingTiming) -> Self {
        let summary = scorer::aggregate(&details);
        GradingResult {
            total_points: summary.possible,
            earned_points: summary.earned,
            percentage: summary.percentage,
            details,
            started_at: timing.started_at,
            completed_at: timing.completed_at,
        }
    }
}

/// The response envelope for grading results, for consistency with the
/// service's other API responses.
#[derive(Debug, Serialize)]
pub struct GradingResponse {
    /// Indicates the grading was produced.
    success: bool,
    /// A human-readable message for the client.
    message: String,
    /// The detailed grading result.
    data: GradingResult,
}

impl From<GradingResult> for GradingResponse {
    fn from(result: GradingResult) -> Self {
        GradingResponse {
            success: true,
            message: "Grading complete.".to_string(),
            data: result,
        }
    }
}
