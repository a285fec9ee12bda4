//! Attempt lifecycle: `in_progress` to `submitted`, terminal.
//!
//! The grading engine itself is stateless and will happily re-grade the same
//! inputs; at-most-once grading per attempt is the caller's guard. This
//! module is that guard in reusable form: the persistence layer loads the
//! attempt, calls [`Attempt::submit`] inside its transition transaction, and
//! only invokes the engine when the transition succeeds.

use crate::error::GraderError;
use crate::report::GradingTiming;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    InProgress,
    Submitted,
}

/// One learner attempt at a simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attempt {
    pub id: String,
    pub simulation_id: String,
    pub status: AttemptStatus,
    pub started_at: DateTime<Utc>,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Attempt {
    pub fn new(id: &str, simulation_id: &str, started_at: DateTime<Utc>) -> Self {
        Attempt {
            id: id.to_string(),
            simulation_id: simulation_id.to_string(),
            status: AttemptStatus::InProgress,
            started_at,
            submitted_at: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status == AttemptStatus::Submitted
    }

    /// Transition into the terminal `submitted` state.
    ///
    /// Returns the timing metadata to hand to the grading engine, or
    /// [`GraderError::AlreadySubmitted`] if the attempt is already terminal.
    pub fn submit(&mut self, at: DateTime<Utc>) -> Result<GradingTiming, GraderError> {
        if self.is_terminal() {
            return Err(GraderError::AlreadySubmitted(self.id.clone()));
        }
        self.status = AttemptStatus::Submitted;
        self.submitted_at = Some(at);
        Ok(GradingTiming {
            started_at: self.started_at,
            completed_at: at,
        })
    }
}
