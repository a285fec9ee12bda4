//! Comparator for dropdown (categorical selection) requirements.
//!
//! Correctness is cross-validated: when the caller supplies the
//! option-correctness side table for the requirement, the selected option is
//! scored against that table; the authored `correct_option_id` is only the
//! fallback when no table entry exists. A disagreement between the two
//! sources is a content-authoring bug, reported as a warning for review
//! without changing the learner's score. Dropdowns carry no partial-credit
//! tier.

use crate::types::{GradingDetail, Response};
use std::collections::HashMap;
use util::sim_catalog::{AnswerKey, Requirement};

/// Grade a dropdown requirement.
///
/// # Arguments
///
/// * `req` - The requirement being graded; must carry a dropdown answer key.
/// * `response` - The learner's response, if any.
/// * `option_flags` - The option-correctness entries for this requirement,
///   if the caller supplied the side table.
pub fn grade(
    req: &Requirement,
    response: Option<&Response>,
    option_flags: Option<&HashMap<String, bool>>,
) -> GradingDetail {
    let Some(AnswerKey::Dropdown { correct_option_id }) = req.answer_key.as_ref() else {
        return GradingDetail::zero(
            req,
            "Not graded",
            "Not available",
            "Answer key unavailable for this requirement",
        );
    };

    let selected = match response {
        Some(Response::Dropdown {
            selected_option_id: Some(s),
        }) if !s.is_empty() => s,
        _ => {
            return GradingDetail::zero(req, "No selection", correct_option_id, "No selection made");
        }
    };

    let is_correct = match option_flags {
        Some(flags) => {
            if !flags.get(correct_option_id).copied().unwrap_or(false) {
                tracing::warn!(
                    requirement_id = %req.id,
                    correct_option_id = %correct_option_id,
                    "authored correct option is not flagged correct in the option table"
                );
            }
            flags.get(selected).copied().unwrap_or(false)
        }
        None => selected == correct_option_id,
    };

    if is_correct {
        GradingDetail::full(req, selected, correct_option_id, "Correct selection")
    } else {
        GradingDetail::zero(
            req,
            selected,
            correct_option_id,
            &format!("Incorrect - the correct option is {correct_option_id}"),
        )
    }
}
