//! Comparator for numeric requirements, with tolerance and sign-flip detection.
//!
//! A numeric answer is accepted within an authored absolute tolerance, an
//! authored percentage tolerance, or a fixed exact-match floor that absorbs
//! floating-point noise. When the answer key opts in via `accept_negative`,
//! a response that matches only after negation earns half credit: in
//! practice that is a learner entering a gain where the key expects a loss,
//! or debiting where the key expects a credit.

use crate::types::{GradingDetail, Response};
use util::rounding::round_points;
use util::sim_catalog::{AnswerKey, Requirement};

/// Comparison floor when no tolerance is authored.
pub(crate) const EXACT_MATCH_FLOOR: f64 = 0.001;

/// Fraction of the requirement's points awarded for a sign error.
const SIGN_ERROR_CREDIT: f64 = 0.5;

/// Test a submitted value against the authored value.
///
/// Tolerance precedence: absolute `tolerance` first, then
/// `tolerance_percent` (scaled by the authored value), then the exact-match
/// floor. Shared with the journal comparator, which applies the same rule
/// to entry amounts.
pub(crate) fn within_tolerance(
    user: f64,
    correct: f64,
    tolerance: Option<f64>,
    tolerance_percent: Option<f64>,
) -> bool {
    if let Some(t) = tolerance {
        (user - correct).abs() <= t
    } else if let Some(p) = tolerance_percent {
        (user - correct).abs() <= (correct * p).abs()
    } else {
        (user - correct).abs() < EXACT_MATCH_FLOOR
    }
}

/// Grade a numeric requirement.
///
/// # Arguments
///
/// * `req` - The requirement being graded; must carry a numeric answer key.
/// * `response` - The learner's response, if any.
///
/// # Returns
///
/// A `GradingDetail` with full credit inside tolerance, half credit
/// (rounded to the nearest whole point) for an accepted sign error, and
/// zero credit otherwise. A missing or mismatched answer key degrades to
/// zero credit instead of failing the grading pass.
pub fn grade(req: &Requirement, response: Option<&Response>) -> GradingDetail {
    let Some(AnswerKey::Numeric {
        value,
        tolerance,
        tolerance_percent,
        accept_negative,
    }) = req.answer_key.as_ref()
    else {
        return GradingDetail::zero(
            req,
            "Not graded",
            "Not available",
            "Answer key unavailable for this requirement",
        );
    };
    let correct_display = value.to_string();

    let user = match response {
        Some(Response::Numeric { value: Some(v) }) => *v,
        _ => {
            return GradingDetail::zero(req, "No answer", &correct_display, "No answer provided");
        }
    };
    let user_display = user.to_string();

    if within_tolerance(user, *value, *tolerance, *tolerance_percent) {
        return GradingDetail::full(req, &user_display, &correct_display, "Correct");
    }

    if *accept_negative && within_tolerance(-user, *value, *tolerance, *tolerance_percent) {
        let earned = round_points(req.points * SIGN_ERROR_CREDIT);
        return GradingDetail::partial(
            req,
            earned,
            &user_display,
            &correct_display,
            "Sign error - partial credit awarded",
        );
    }

    GradingDetail::zero(
        req,
        &user_display,
        &correct_display,
        &format!("Incorrect - the correct value is {correct_display}"),
    )
}
