//! Comparator for free-text requirements, scored by keyword coverage.
//!
//! The response is searched for each authored keyword as a substring (after
//! optional case normalization) and the coverage ratio drives a credit
//! ladder expressed as ordered data rules. Substring containment can
//! over-credit when a short keyword appears inside an unrelated word; that
//! approximation is part of the scoring contract and must not be tightened
//! without product direction, since it would change historical scores.

use crate::types::{GradingDetail, Response};
use util::rounding::round_points;
use util::sim_catalog::{AnswerKey, Requirement};

#[derive(Debug, Clone, Copy)]
enum Award {
    Full,
    Proportional,
    None,
}

/// Coverage ladder, evaluated top-down; the first rule whose threshold the
/// keyword ratio meets decides the award.
const COVERAGE_LADDER: &[(f64, Award)] = &[
    (0.8, Award::Full),
    (0.5, Award::Proportional),
    (0.0, Award::None),
];

/// Grade a free-text requirement by keyword coverage.
pub fn grade(req: &Requirement, response: Option<&Response>) -> GradingDetail {
    let Some(AnswerKey::FreeText {
        keywords,
        case_sensitive,
    }) = req.answer_key.as_ref()
    else {
        return GradingDetail::zero(
            req,
            "Not graded",
            "Not available",
            "Answer key unavailable for this requirement",
        );
    };
    let correct_display = format!("Key points: {}", keywords.join(", "));

    let text = match response {
        Some(Response::FreeText { text: Some(t) }) if !t.trim().is_empty() => t,
        _ => {
            return GradingDetail::zero(req, "No answer", &correct_display, "No answer provided");
        }
    };

    if keywords.is_empty() {
        return GradingDetail::zero(
            req,
            text,
            &correct_display,
            "Answer key unavailable for this requirement",
        );
    }

    let haystack = if *case_sensitive {
        text.clone()
    } else {
        text.to_lowercase()
    };
    let (found, missing): (Vec<&String>, Vec<&String>) = keywords.iter().partition(|keyword| {
        if *case_sensitive {
            haystack.contains(keyword.as_str())
        } else {
            haystack.contains(&keyword.to_lowercase())
        }
    });
    let ratio = found.len() as f64 / keywords.len() as f64;

    for (threshold, award) in COVERAGE_LADDER {
        if ratio >= *threshold {
            return match award {
                Award::Full => {
                    GradingDetail::full(req, text, &correct_display, "All key points covered")
                }
                Award::Proportional => GradingDetail::partial(
                    req,
                    round_points(req.points * ratio),
                    text,
                    &correct_display,
                    &format!(
                        "Partial credit - {}/{} key points addressed",
                        found.len(),
                        keywords.len()
                    ),
                ),
                Award::None => GradingDetail::zero(
                    req,
                    text,
                    &correct_display,
                    &format!(
                        "Missing key points: {}",
                        missing
                            .iter()
                            .map(|k| k.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                ),
            };
        }
    }

    // The ladder's last rule has threshold 0.0, so it always matches.
    GradingDetail::zero(req, text, &correct_display, "Missing key points")
}
