//! Shared error types for the services crate.

use thiserror::Error;

use recall_core::WeekError;

use crate::quiz::{PhaseKind, QuizAction};

/// Errors emitted by the quiz controller and loop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    InvalidWeek(#[from] WeekError),
    #[error("{action} is not available during {phase}")]
    UnexpectedPhase { action: QuizAction, phase: PhaseKind },
    #[error("no round entry at position {position}")]
    UnknownEntry { position: usize },
    #[error("study pacing needs a running tokio runtime")]
    PacerUnavailable,
}

/// Errors emitted while building `QuizSettings`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("study interval must be greater than zero")]
    ZeroStudyInterval,
}
