use recall_core::{RoundEntry, RoundNumber, RoundRecord, Verdict, Week, WordsetId};

use super::phase::PhaseKind;

/// Presentation-agnostic picture of the quiz at one instant.
///
/// This is intentionally **not** a UI view-model: no CSS classes, no
/// pre-formatted scores. The UI maps it to whatever it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub phase: PhaseKind,
    pub label: String,
    /// Progress indicator value, `0..=100`.
    pub progress: u8,
    pub screen: Screen,
}

/// Phase-specific data for the active region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Study {
        left: &'static str,
        right: &'static str,
        position: usize,
        total: usize,
        upcoming: RoundNumber,
    },
    Round {
        number: RoundNumber,
        items: Vec<RoundItem>,
    },
    Summary {
        week: Week,
        wordset: WordsetId,
        scores: Vec<RoundScore>,
    },
}

/// One cue with its input, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundItem {
    pub position: usize,
    pub cue: &'static str,
    pub answer: String,
}

impl RoundItem {
    pub(crate) fn from_entry(position: usize, entry: &RoundEntry) -> Self {
        Self {
            position,
            cue: entry.cue(),
            answer: entry.answer().to_string(),
        }
    }
}

/// A scored entry of a submitted round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewedEntry {
    pub cue: &'static str,
    pub target: &'static str,
    pub answer: String,
    pub verdict: Verdict,
}

impl From<&RoundEntry> for ReviewedEntry {
    fn from(entry: &RoundEntry) -> Self {
        Self {
            cue: entry.cue(),
            target: entry.target(),
            answer: entry.answer().to_string(),
            verdict: entry.verdict().unwrap_or(Verdict::Incorrect),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundScore {
    pub round: RoundNumber,
    pub correct: u8,
    pub total: usize,
    /// Entries in the order they were presented.
    pub entries: Vec<ReviewedEntry>,
}

impl From<&RoundRecord> for RoundScore {
    fn from(record: &RoundRecord) -> Self {
        Self {
            round: record.number(),
            correct: record.correct_count(),
            total: record.len(),
            entries: record.entries().iter().map(ReviewedEntry::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use recall_core::{CueSide, WordPair, score_round};

    use super::*;

    #[test]
    fn round_score_lists_scored_entries_in_presentation_order() {
        let number = RoundNumber::new(2).unwrap();
        let mut record = RoundRecord::new(
            number,
            vec![
                RoundEntry::new(4, WordPair::new("tree", "mask"), CueSide::Right),
                RoundEntry::new(0, WordPair::new("cat", "ring"), CueSide::Left),
            ],
        );
        record.set_answer(0, " Tree ");
        record.set_answer(1, "rope");
        score_round(&mut record);

        let score = RoundScore::from(&record);
        assert_eq!(score.correct, 1);
        assert_eq!(score.total, 2);
        assert_eq!(
            score.entries,
            vec![
                ReviewedEntry {
                    cue: "mask",
                    target: "tree",
                    answer: "tree".into(),
                    verdict: Verdict::Correct,
                },
                ReviewedEntry {
                    cue: "cat",
                    target: "ring",
                    answer: "rope".into(),
                    verdict: Verdict::Incorrect,
                },
            ]
        );
    }
}
