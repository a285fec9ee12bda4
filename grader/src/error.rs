//! Grader Error Types
//!
//! This module defines the [`GraderError`] enum for caller-level misuse of the
//! grading engine. Grading itself is total: malformed payloads, missing
//! responses, and unknown requirement types are scored as zero credit rather
//! than raised as errors, so the only failure surfaced here is an attempt
//! lifecycle violation.

/// Represents caller-level errors around the grading engine.
#[derive(Debug)]
pub enum GraderError {
    /// The attempt is already in the terminal `submitted` state and must not
    /// be graded again. Carries the attempt id.
    AlreadySubmitted(String),
}
