//! # Types Module
//!
//! Core data structures shared across the grading engine: the learner's
//! submitted responses and the per-requirement grading detail produced by
//! the comparators.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use util::sim_catalog::Requirement;

/// A learner's submitted answer for one requirement.
///
/// Each variant mirrors the payload shape of the matching requirement type,
/// with every field nullable: the player saves whatever the learner has
/// entered, including nothing at all. A response whose variant does not
/// match the requirement's declared type is treated as unanswered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    Numeric {
        value: Option<f64>,
    },
    Dropdown {
        selected_option_id: Option<String>,
    },
    Journal {
        account_id: Option<String>,
        amount: Option<f64>,
    },
    FreeText {
        text: Option<String>,
    },
    Citation {
        text: Option<String>,
    },
}

/// All responses for one attempt, keyed by requirement id.
///
/// A requirement absent from the map is graded identically to an explicitly
/// empty response.
pub type ResponseSet = HashMap<String, Response>;

/// The scored, explained outcome for one requirement.
///
/// Exactly one credit tier holds per detail: fully correct
/// (`is_correct`), partial credit (`is_partial_credit`), or zero credit
/// (both flags false). Construct details through [`GradingDetail::full`],
/// [`GradingDetail::partial`], or [`GradingDetail::zero`] so the tier flags
/// and the `0 <= points_earned <= points_possible` bound hold by
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradingDetail {
    pub requirement_id: String,
    pub requirement_label: String,
    pub points_earned: f64,
    pub points_possible: f64,
    pub is_correct: bool,
    pub is_partial_credit: bool,
    /// Display string of what the learner submitted.
    pub user_answer: String,
    /// Display string of the authored correct answer.
    pub correct_answer: String,
    /// Human-readable rationale for the awarded credit.
    pub feedback: String,
}

impl GradingDetail {
    fn possible(req: &Requirement) -> f64 {
        req.points.max(0.0)
    }

    /// Full credit: the response satisfies the answer key.
    pub fn full(req: &Requirement, user_answer: &str, correct_answer: &str, feedback: &str) -> Self {
        let possible = Self::possible(req);
        GradingDetail {
            requirement_id: req.id.clone(),
            requirement_label: req.label.clone(),
            points_earned: possible,
            points_possible: possible,
            is_correct: true,
            is_partial_credit: false,
            user_answer: user_answer.to_string(),
            correct_answer: correct_answer.to_string(),
            feedback: feedback.to_string(),
        }
    }

    /// Partial credit: `earned` is clamped into `[0, points_possible]`.
    pub fn partial(
        req: &Requirement,
        earned: f64,
        user_answer: &str,
        correct_answer: &str,
        feedback: &str,
    ) -> Self {
        let possible = Self::possible(req);
        GradingDetail {
            requirement_id: req.id.clone(),
            requirement_label: req.label.clone(),
            points_earned: earned.clamp(0.0, possible),
            points_possible: possible,
            is_correct: false,
            is_partial_credit: true,
            user_answer: user_answer.to_string(),
            correct_answer: correct_answer.to_string(),
            feedback: feedback.to_string(),
        }
    }

    /// Zero credit: unanswered, incorrect, or ungradable.
    pub fn zero(req: &Requirement, user_answer: &str, correct_answer: &str, feedback: &str) -> Self {
        let possible = Self::possible(req);
        GradingDetail {
            requirement_id: req.id.clone(),
            requirement_label: req.label.clone(),
            points_earned: 0.0,
            points_possible: possible,
            is_correct: false,
            is_partial_credit: false,
            user_answer: user_answer.to_string(),
            correct_answer: correct_answer.to_string(),
            feedback: feedback.to_string(),
        }
    }
}
