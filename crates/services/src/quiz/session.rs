use std::fmt;

use rand::Rng;
use recall_core::{RoundNumber, RoundRecord, Week, WordPair, Wordset, WordsetId};

use crate::shuffle::shuffled;

/// One run of the quiz, from a submitted week to the summary.
///
/// Dropped on restart; a new week builds a fresh one.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    week: Week,
    wordset: WordsetId,
    pairs: Vec<WordPair>,
    rounds: Vec<RoundRecord>,
}

impl Session {
    /// Selects the week's wordset and shuffles a working copy of its pairs.
    pub fn new<R: Rng + ?Sized>(week: Week, rng: &mut R) -> Self {
        let wordset = Wordset::for_week(week);
        Self {
            week,
            wordset: wordset.id(),
            pairs: shuffled(wordset.pairs(), rng),
            rounds: Vec::new(),
        }
    }

    #[must_use]
    pub fn week(&self) -> Week {
        self.week
    }

    #[must_use]
    pub fn wordset(&self) -> WordsetId {
        self.wordset
    }

    /// Working pair order, used for every study phase of this session.
    #[must_use]
    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Submitted rounds, in order.
    #[must_use]
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// Score of a submitted round.
    #[must_use]
    pub fn score(&self, round: RoundNumber) -> Option<u8> {
        self.rounds
            .iter()
            .find(|record| record.number() == round)
            .map(RoundRecord::correct_count)
    }

    pub(crate) fn record_round(&mut self, record: RoundRecord) {
        self.rounds.retain(|existing| existing.number() != record.number());
        self.rounds.push(record);
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("week", &self.week)
            .field("wordset", &self.wordset)
            .field("pairs_len", &self.pairs.len())
            .field("rounds_len", &self.rounds.len())
            .finish_non_exhaustive()
    }
}
