//! # Grader Library
//!
//! Core logic for grading task-based simulation attempts. Given the authored
//! requirement catalog for a simulation and a learner's response set, the
//! grader produces a deterministic, explainable [`GradingResult`]: one
//! grading detail per requirement plus aggregate totals and a percentage.
//!
//! ## Key Concepts
//! - **GradingJob**: the single entry point, one job per attempt submission.
//! - **Comparators**: one pure comparison function per requirement type
//!   (numeric, dropdown, journal debit/credit, free text, citation).
//! - **Scorer**: aggregates per-requirement details into the attempt score.
//! - **Attempt lifecycle**: the `in_progress -> submitted` guard callers
//!   apply before invoking the engine.
//!
//! Grading is total: every requirement in the catalog receives a detail, and
//! missing responses, malformed answer keys, and unknown requirement types
//! are scored as zero credit with an explanatory feedback string rather than
//! raised as errors. The engine performs no I/O and never reads the clock;
//! the caller supplies timing metadata and persists the result.

pub mod attempt;
pub mod comparators;
pub mod error;
pub mod report;
pub mod scorer;
pub mod types;

use crate::comparators::DropdownCorrectness;
use crate::report::{GradingResult, GradingTiming};
use crate::types::{GradingDetail, ResponseSet};
use util::sim_catalog::SimCatalog;

/// A grading job for a single attempt submission.
///
/// Wraps the three inputs of a grading call: the authored catalog, the
/// learner's responses, and the caller-supplied timing metadata. The
/// option-correctness side table for dropdown requirements is attached
/// separately when the caller has one.
pub struct GradingJob {
    catalog: SimCatalog,
    responses: ResponseSet,
    dropdown_correctness: Option<DropdownCorrectness>,
    timing: GradingTiming,
}

impl GradingJob {
    /// Create a new grading job.
    ///
    /// # Arguments
    /// * `catalog` - The authored requirement catalog, treated as read-only.
    /// * `responses` - The learner's responses, keyed by requirement id.
    /// * `timing` - Attempt timing metadata, supplied by the caller.
    pub fn new(catalog: SimCatalog, responses: ResponseSet, timing: GradingTiming) -> Self {
        Self {
            catalog,
            responses,
            dropdown_correctness: None,
            timing,
        }
    }

    /// Attach the option-correctness side table used to cross-validate
    /// dropdown requirements.
    pub fn with_dropdown_correctness(mut self, table: DropdownCorrectness) -> Self {
        self.dropdown_correctness = Some(table);
        self
    }

    /// Grade the attempt.
    ///
    /// Walks the catalog in order, dispatches each requirement to its
    /// comparator, and aggregates the details into a [`GradingResult`].
    /// Never fails: an empty catalog or a catalog worth zero points grades
    /// to a well-defined 0% result.
    pub fn grade(self) -> GradingResult {
        let mut details: Vec<GradingDetail> = Vec::with_capacity(self.catalog.requirements.len());

        for requirement in &self.catalog.requirements {
            let response = self.responses.get(&requirement.id);
            let detail = comparators::grade_requirement(
                requirement,
                response,
                self.dropdown_correctness.as_ref(),
            );
            tracing::debug!(
                requirement_id = %requirement.id,
                earned = detail.points_earned,
                possible = detail.points_possible,
                "graded requirement"
            );
            details.push(detail);
        }

        GradingResult::assemble(details, self.timing)
    }
}
