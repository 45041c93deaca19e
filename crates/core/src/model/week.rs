use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while reading a week number from user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WeekError {
    #[error("week number is empty")]
    Empty,

    #[error("week number is not a whole number: {0:?}")]
    NotANumber(String),

    #[error("week number must be 1 or higher, got {0}")]
    NotPositive(i64),
}

impl WeekError {
    /// Message shown next to the week input.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        "Please enter a valid week number (1 or higher)."
    }
}

/// A training week, always 1 or higher.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Week(NonZeroU32);

impl Week {
    /// Creates a week, returning `None` for 0.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0.get()
    }

    /// Parses user-entered text. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `WeekError::Empty` for blank input, `WeekError::NotANumber` for anything that is
    /// not an integer in range, and `WeekError::NotPositive` for 0 and negatives.
    pub fn parse(raw: &str) -> Result<Self, WeekError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WeekError::Empty);
        }

        let value: i64 = trimmed
            .parse()
            .map_err(|_| WeekError::NotANumber(trimmed.to_string()))?;
        if value < 1 {
            return Err(WeekError::NotPositive(value));
        }

        u32::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| WeekError::NotANumber(trimmed.to_string()))
    }
}

impl fmt::Debug for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week({})", self.0)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
