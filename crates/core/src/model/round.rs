use std::fmt;

use super::pair::{CueSide, WordPair};

/// Number of recall rounds in a session.
pub const ROUNDS: u8 = 3;

//
// ─── ROUND NUMBER ─────────────────────────────────────────────────────────────
//

/// 1-based round number, always within `1..=ROUNDS`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundNumber(u8);

impl RoundNumber {
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (1..=ROUNDS).contains(&value).then_some(Self(value))
    }

    #[must_use]
    pub const fn first() -> Self {
        Self(1)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// The following round, or `None` after the last one.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self.0 == ROUNDS
    }

    /// Rounds finished before this one started.
    #[must_use]
    pub fn completed_before(self) -> u8 {
        self.0 - 1
    }
}

impl fmt::Debug for RoundNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundNumber({})", self.0)
    }
}

impl fmt::Display for RoundNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── ROUND ENTRY ──────────────────────────────────────────────────────────────
//

/// Outcome of comparing one typed answer with its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// One cue/input item of a round, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEntry {
    pair_index: usize,
    pair: WordPair,
    cue_side: CueSide,
    pub(crate) answer: String,
    pub(crate) verdict: Option<Verdict>,
}

impl RoundEntry {
    /// `pair_index` is the position of `pair` in the session's working list.
    #[must_use]
    pub fn new(pair_index: usize, pair: WordPair, cue_side: CueSide) -> Self {
        Self {
            pair_index,
            pair,
            cue_side,
            answer: String::new(),
            verdict: None,
        }
    }

    #[must_use]
    pub fn pair_index(&self) -> usize {
        self.pair_index
    }

    #[must_use]
    pub fn cue_side(&self) -> CueSide {
        self.cue_side
    }

    #[must_use]
    pub fn cue(&self) -> &'static str {
        self.pair.word(self.cue_side)
    }

    #[must_use]
    pub fn target(&self) -> &'static str {
        self.pair.target(self.cue_side)
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// `None` until the round has been scored.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }
}

//
// ─── ROUND RECORD ─────────────────────────────────────────────────────────────
//

/// Everything typed and scored during one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    number: RoundNumber,
    entries: Vec<RoundEntry>,
    pub(crate) correct_count: u8,
}

impl RoundRecord {
    #[must_use]
    pub fn new(number: RoundNumber, entries: Vec<RoundEntry>) -> Self {
        Self {
            number,
            entries,
            correct_count: 0,
        }
    }

    #[must_use]
    pub fn number(&self) -> RoundNumber {
        self.number
    }

    #[must_use]
    pub fn entries(&self) -> &[RoundEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [RoundEntry] {
        &mut self.entries
    }

    #[must_use]
    pub fn entry(&self, position: usize) -> Option<&RoundEntry> {
        self.entries.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Correct answers as of the last scoring pass.
    #[must_use]
    pub fn correct_count(&self) -> u8 {
        self.correct_count
    }

    /// Replaces the typed text at `position`. Returns `false` for an unknown position.
    pub fn set_answer(&mut self, position: usize, text: impl Into<String>) -> bool {
        match self.entries.get_mut(position) {
            Some(entry) => {
                entry.answer = text.into();
                true
            }
            None => false,
        }
    }

    /// Position after `position` in presentation order, if any.
    #[must_use]
    pub fn next_position(&self, position: usize) -> Option<usize> {
        let next = position.checked_add(1)?;
        (next < self.entries.len()).then_some(next)
    }
}
