//! Comparator for citation requirements.
//!
//! Learners cite authoritative guidance in many shapes: "ASC 605-10",
//! "asc605-10", or just the topic code. Both sides are normalized
//! (lowercased, whitespace stripped) and accepted on mutual containment, so
//! a partially qualified citation matches its fully qualified form. The
//! answer key may list alternative citations that are accepted the same
//! way. Credit is binary.

use crate::types::{GradingDetail, Response};
use util::sim_catalog::{AnswerKey, Requirement};

/// Lowercase and strip all whitespace.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Accept when either normalized citation contains the other. An empty
/// authored citation never matches.
fn citations_match(user_norm: &str, authored: &str) -> bool {
    let authored_norm = normalize(authored);
    if authored_norm.is_empty() {
        return false;
    }
    user_norm.contains(&authored_norm) || authored_norm.contains(user_norm)
}

/// Grade a citation requirement.
pub fn grade(req: &Requirement, response: Option<&Response>) -> GradingDetail {
    let Some(AnswerKey::Citation {
        source,
        topic_code,
        alternative_citations,
    }) = req.answer_key.as_ref()
    else {
        return GradingDetail::zero(
            req,
            "Not graded",
            "Not available",
            "Answer key unavailable for this requirement",
        );
    };
    let correct_display = format!("{source} {topic_code}");

    let text = match response {
        Some(Response::Citation { text: Some(t) }) if !t.trim().is_empty() => t,
        _ => {
            return GradingDetail::zero(req, "No answer", &correct_display, "No answer provided");
        }
    };
    let user_norm = normalize(text);

    if citations_match(&user_norm, &correct_display) {
        return GradingDetail::full(req, text, &correct_display, "Correct citation");
    }

    for alt in alternative_citations {
        let alt_display = format!("{} {}", alt.source, alt.topic_code);
        if citations_match(&user_norm, &alt_display) {
            return GradingDetail::full(
                req,
                text,
                &correct_display,
                &format!("Alternative citation accepted: {alt_display}"),
            );
        }
    }

    GradingDetail::zero(
        req,
        text,
        &correct_display,
        &format!("Incorrect - expected citation {correct_display}"),
    )
}
