//! # Comparators
//!
//! One comparator module per requirement type, plus the dispatch function
//! that routes a requirement to the comparator matching its declared kind.
//!
//! Every comparator is a pure function from the requirement, the learner's
//! response, and any auxiliary context to a [`GradingDetail`]. Comparators
//! return a result for every input: an absent or malformed answer is a
//! legitimate, expected case scored as zero credit, never an error.
//!
//! The available comparators are:
//! - [`numeric`]: exact or tolerance-based numeric comparison with sign-flip
//!   detection.
//! - [`dropdown`]: categorical selection, cross-validated against the
//!   option-correctness side table.
//! - [`journal`]: dual-sided ledger entries with an account/amount
//!   partial-credit ladder.
//! - [`free_text`]: keyword-coverage scoring with a ratio ladder.
//! - [`citation`]: normalized citation matching with accepted alternates.

pub mod citation;
pub mod dropdown;
pub mod free_text;
pub mod journal;
pub mod numeric;

use crate::types::{GradingDetail, Response};
use std::collections::HashMap;
use util::sim_catalog::{Requirement, RequirementKind};

/// Option-correctness side table: requirement id -> option id -> flag.
/// Supplied by the caller alongside the catalog; used only by the dropdown
/// comparator.
pub type DropdownCorrectness = HashMap<String, HashMap<String, bool>>;

/// Dispatch one requirement to the comparator matching its kind.
///
/// The match is exhaustive over [`RequirementKind`], so adding a new
/// requirement type forces a dispatch decision here. An [`Unknown`] kind
/// (an unrecognized tag in authored content) is scored as zero credit so
/// one inconsistent catalog entry cannot block the rest of the attempt.
///
/// [`Unknown`]: RequirementKind::Unknown
pub fn grade_requirement(
    req: &Requirement,
    response: Option<&Response>,
    dropdown_correctness: Option<&DropdownCorrectness>,
) -> GradingDetail {
    match req.kind {
        RequirementKind::Numeric => numeric::grade(req, response),
        RequirementKind::Dropdown => dropdown::grade(
            req,
            response,
            dropdown_correctness.and_then(|table| table.get(&req.id)),
        ),
        RequirementKind::JournalDebit | RequirementKind::JournalCredit => {
            journal::grade(req, response)
        }
        RequirementKind::FreeText => free_text::grade(req, response),
        RequirementKind::Citation => citation::grade(req, response),
        RequirementKind::Unknown => {
            tracing::debug!(requirement_id = %req.id, "unrecognized requirement type");
            GradingDetail::zero(req, "Not graded", "Not available", "Unknown requirement type")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use util::sim_catalog::AnswerKey;

    fn requirement(kind: RequirementKind, answer_key: Option<AnswerKey>) -> Requirement {
        Requirement {
            id: "r1".to_string(),
            order: 1,
            kind,
            label: "Requirement".to_string(),
            points: 10.0,
            answer_key,
            explanation: None,
        }
    }

    #[test]
    fn test_unknown_kind_scores_zero_and_continues() {
        let req = requirement(RequirementKind::Unknown, None);
        let detail = grade_requirement(&req, None, None);
        assert_eq!(detail.points_earned, 0.0);
        assert_eq!(detail.points_possible, 10.0);
        assert_eq!(detail.feedback, "Unknown requirement type");
    }

    #[test]
    fn test_journal_sides_share_a_comparator() {
        let key = AnswerKey::Journal {
            account_id: "A1".to_string(),
            account_name: "Cash".to_string(),
            amount: 100.0,
            tolerance: None,
        };
        let response = Response::Journal {
            account_id: Some("A1".to_string()),
            amount: Some(100.0),
        };
        for kind in [RequirementKind::JournalDebit, RequirementKind::JournalCredit] {
            let req = requirement(kind, Some(key.clone()));
            let detail = grade_requirement(&req, Some(&response), None);
            assert!(detail.is_correct);
        }
    }

    #[test]
    fn test_dispatch_hands_dropdown_its_own_table_entry() {
        let req = requirement(
            RequirementKind::Dropdown,
            Some(AnswerKey::Dropdown {
                correct_option_id: "opt-a".to_string(),
            }),
        );
        let mut table: DropdownCorrectness = HashMap::new();
        table.insert(
            "r1".to_string(),
            HashMap::from([("opt-a".to_string(), true), ("opt-b".to_string(), false)]),
        );
        // An entry for a different requirement id must not leak in.
        table.insert(
            "other".to_string(),
            HashMap::from([("opt-b".to_string(), true)]),
        );
        let response = Response::Dropdown {
            selected_option_id: Some("opt-b".to_string()),
        };
        let detail = grade_requirement(&req, Some(&response), Some(&table));
        assert!(!detail.is_correct);
    }

    #[test]
    fn test_mismatched_key_degrades_through_dispatch() {
        // A numeric requirement carrying a dropdown payload.
        let req = requirement(
            RequirementKind::Numeric,
            Some(AnswerKey::Dropdown {
                correct_option_id: "opt-a".to_string(),
            }),
        );
        let response = Response::Numeric { value: Some(1.0) };
        let detail = grade_requirement(&req, Some(&response), None);
        assert_eq!(detail.points_earned, 0.0);
        assert_eq!(detail.feedback, "Answer key unavailable for this requirement");
    }
}
