//! # Scorer Module
//!
//! Aggregates per-requirement grading details into the attempt-level score.
//! The percentage is earned over possible, rounded half-up to two decimal
//! places through the shared rounding policy; an attempt with zero possible
//! points scores a well-defined 0%.

use crate::types::GradingDetail;
use util::rounding::round2;

/// The aggregate score for one attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub earned: f64,
    pub possible: f64,
    pub percentage: f64,
}

/// Sum earned and possible points across all details and derive the
/// percentage. Never produces NaN: an empty or zero-point attempt yields
/// `0.0` across the board.
pub fn aggregate(details: &[GradingDetail]) -> ScoreSummary {
    let mut earned = 0.0;
    let mut possible = 0.0;
    for detail in details {
        earned += detail.points_earned;
        possible += detail.points_possible;
    }

    let percentage = if possible > 0.0 {
        round2(earned / possible * 100.0)
    } else {
        0.0
    };

    ScoreSummary {
        earned: round2(earned),
        possible: round2(possible),
        percentage,
    }
}
