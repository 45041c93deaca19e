use std::time::Duration;

use crate::error::SettingsError;

/// How long each pair stays on screen while studying.
pub const DEFAULT_STUDY_INTERVAL: Duration = Duration::from_millis(3000);

/// Tunables for a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    study_interval: Duration,
}

impl QuizSettings {
    /// # Errors
    ///
    /// Returns `SettingsError::ZeroStudyInterval` for a zero interval.
    pub fn new(study_interval: Duration) -> Result<Self, SettingsError> {
        if study_interval.is_zero() {
            return Err(SettingsError::ZeroStudyInterval);
        }
        Ok(Self { study_interval })
    }

    /// # Errors
    ///
    /// Returns `SettingsError::ZeroStudyInterval` for 0 ms.
    pub fn from_millis(millis: u64) -> Result<Self, SettingsError> {
        Self::new(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn study_interval(&self) -> Duration {
        self.study_interval
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            study_interval: DEFAULT_STUDY_INTERVAL,
        }
    }
}
