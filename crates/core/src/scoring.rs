//! Answer normalization and round scoring.

use crate::model::{RoundRecord, Verdict};

/// Trims surrounding whitespace and lowercases.
#[must_use]
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Scores every entry of `record`, marks each one correct or incorrect and stores the
/// normalized answer. Returns the number of correct entries.
///
/// Scoring the same, unmodified record again yields the same count.
pub fn score_round(record: &mut RoundRecord) -> u8 {
    let mut correct = 0_u8;

    for entry in record.entries_mut() {
        let typed = normalize(&entry.answer);
        let verdict = if typed == normalize(entry.target()) {
            correct = correct.saturating_add(1);
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };
        entry.answer = typed;
        entry.verdict = Some(verdict);
    }

    record.correct_count = correct;
    correct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CueSide, RoundEntry, RoundNumber, WordPair, Wordset, WordsetId};

    fn full_record() -> RoundRecord {
        let set = Wordset::get(WordsetId::new(0).unwrap());
        let entries = set
            .pairs()
            .iter()
            .enumerate()
            .map(|(i, pair)| {
                let side = if i % 2 == 0 { CueSide::Left } else { CueSide::Right };
                RoundEntry::new(i, *pair, side)
            })
            .collect();
        RoundRecord::new(RoundNumber::first(), entries)
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize(" Cat "), "cat");
        assert_eq!(normalize("\tRING\n"), "ring");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn case_and_whitespace_do_not_matter() {
        let mut record = RoundRecord::new(
            RoundNumber::first(),
            vec![RoundEntry::new(0, WordPair::new("cat", "ring"), CueSide::Right)],
        );
        record.set_answer(0, " Cat ");
        assert_eq!(score_round(&mut record), 1);
        let entry = record.entry(0).unwrap();
        assert_eq!(entry.verdict(), Some(Verdict::Correct));
        assert_eq!(entry.answer(), "cat");
    }

    #[test]
    fn all_targets_score_twelve() {
        let mut record = full_record();
        let targets: Vec<_> = record.entries().iter().map(RoundEntry::target).collect();
        for (pos, target) in targets.into_iter().enumerate() {
            record.set_answer(pos, target.to_uppercase());
        }
        assert_eq!(score_round(&mut record), 12);
        assert_eq!(record.correct_count(), 12);
    }

    #[test]
    fn blank_round_scores_zero_and_marks_everything_incorrect() {
        let mut record = full_record();
        assert_eq!(score_round(&mut record), 0);
        assert!(
            record
                .entries()
                .iter()
                .all(|e| e.verdict() == Some(Verdict::Incorrect))
        );
    }

    #[test]
    fn answering_with_the_cue_is_wrong() {
        let mut record = full_record();
        let cue = record.entry(3).unwrap().cue();
        record.set_answer(3, cue);
        assert_eq!(score_round(&mut record), 0);
    }

    #[test]
    fn rescoring_is_idempotent() {
        let mut record = full_record();
        let target = record.entry(0).unwrap().target();
        record.set_answer(0, format!("  {target}"));
        record.set_answer(1, "nope");
        let first = score_round(&mut record);
        let second = score_round(&mut record);
        assert_eq!(first, 1);
        assert_eq!(first, second);
    }
}
