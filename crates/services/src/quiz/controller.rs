use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use recall_core::{CueSide, ROUNDS, RoundEntry, RoundNumber, RoundRecord, Week, score_round};
use tracing::{debug, info};

use super::pacer::StudyTick;
use super::phase::{PhaseKind, QuizAction};
use super::progress::percent;
use super::session::Session;
use super::view::{QuizSnapshot, RoundItem, RoundScore, Screen};
use crate::error::QuizError;
use crate::shuffle::shuffled;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

enum Phase {
    Setup,
    Study {
        session: Session,
        upcoming: RoundNumber,
        cursor: usize,
    },
    Round {
        session: Session,
        record: RoundRecord,
    },
    Summary {
        session: Session,
    },
}

impl Phase {
    fn kind(&self) -> PhaseKind {
        match self {
            Phase::Setup => PhaseKind::Setup,
            Phase::Study { .. } => PhaseKind::Study,
            Phase::Round { .. } => PhaseKind::Round,
            Phase::Summary { .. } => PhaseKind::Summary,
        }
    }

    fn session(&self) -> Option<&Session> {
        match self {
            Phase::Setup => None,
            Phase::Study { session, .. }
            | Phase::Round { session, .. }
            | Phase::Summary { session } => Some(session),
        }
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Finite-state machine for setup → study → round ×3 → summary.
///
/// The controller never starts timers itself. While studying it exposes a pacing epoch
/// (see [`QuizController::pacing`]); whoever owns the timer feeds back [`StudyTick`]s
/// carrying that epoch.
pub struct QuizController {
    rng: StdRng,
    phase: Phase,
    study_epoch: u64,
}

impl QuizController {
    /// Controller with an OS-seeded random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Controller with a deterministic random source.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            phase: Phase::Setup,
            study_epoch: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> PhaseKind {
        self.phase.kind()
    }

    /// The running session; `None` during setup.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.phase.session()
    }

    /// The round being answered, if any.
    #[must_use]
    pub fn round(&self) -> Option<&RoundRecord> {
        match &self.phase {
            Phase::Round { record, .. } => Some(record),
            _ => None,
        }
    }

    /// Index of the pair currently studied.
    #[must_use]
    pub fn study_position(&self) -> Option<usize> {
        match &self.phase {
            Phase::Study { cursor, .. } => Some(*cursor),
            _ => None,
        }
    }

    /// Epoch of the study phase that wants pacing ticks, or `None` when no timer should run.
    ///
    /// Every entry into study gets a fresh epoch.
    #[must_use]
    pub fn pacing(&self) -> Option<u64> {
        matches!(self.phase, Phase::Study { .. }).then_some(self.study_epoch)
    }

    /// Current progress indicator value, `0..=100`.
    #[must_use]
    pub fn progress(&self) -> u8 {
        match &self.phase {
            Phase::Setup => 0,
            Phase::Study {
                session, cursor, ..
            } => percent(*cursor, session.pair_count()),
            Phase::Round { record, .. } => percent(
                usize::from(record.number().completed_before()),
                usize::from(ROUNDS),
            ),
            Phase::Summary { .. } => 100,
        }
    }

    /// Human-readable phase name ("Setup", "Study", "Round 2", "Summary").
    #[must_use]
    pub fn label(&self) -> String {
        match &self.phase {
            Phase::Setup => "Setup".to_string(),
            Phase::Study { .. } => "Study".to_string(),
            Phase::Round { record, .. } => format!("Round {}", record.number()),
            Phase::Summary { .. } => "Summary".to_string(),
        }
    }

    /// Validates the week and begins a session with the first study phase.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidWeek` for unusable input (state is unchanged) and
    /// `QuizError::UnexpectedPhase` outside of setup.
    pub fn start(&mut self, raw_week: &str) -> Result<(), QuizError> {
        self.expect_phase(QuizAction::Start, PhaseKind::Setup)?;
        let week = Week::parse(raw_week)?;
        let session = Session::new(week, &mut self.rng);
        info!(week = %week, wordset = %session.wordset(), "session started");
        self.enter_study(session, RoundNumber::first());
        Ok(())
    }

    /// Applies a pacing tick. Ticks from an earlier study phase are ignored.
    ///
    /// Returns whether the tick advanced the study cursor.
    pub fn on_study_tick(&mut self, tick: StudyTick) -> bool {
        if self.pacing() != Some(tick.epoch()) {
            debug!(epoch = tick.epoch(), "ignoring stale study tick");
            return false;
        }
        self.advance_study();
        true
    }

    /// Moves on to the next pair, exactly like a pacing tick.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnexpectedPhase` outside of study.
    pub fn skip_study(&mut self) -> Result<(), QuizError> {
        self.expect_phase(QuizAction::SkipStudy, PhaseKind::Study)?;
        self.advance_study();
        Ok(())
    }

    /// Stores the text typed for the entry at `position` (presentation order).
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnexpectedPhase` outside of a round and
    /// `QuizError::UnknownEntry` for a position past the last entry.
    pub fn set_answer(&mut self, position: usize, text: impl Into<String>) -> Result<(), QuizError> {
        let phase = self.phase.kind();
        let Phase::Round { record, .. } = &mut self.phase else {
            return Err(QuizError::UnexpectedPhase {
                action: QuizAction::Answer,
                phase,
            });
        };
        if record.set_answer(position, text) {
            Ok(())
        } else {
            Err(QuizError::UnknownEntry { position })
        }
    }

    /// Input to focus after Enter at `position`, in presentation order.
    #[must_use]
    pub fn next_input(&self, position: usize) -> Option<usize> {
        self.round()?.next_position(position)
    }

    /// Scores the current round, then studies again before the next round or shows the
    /// summary after the last one. Returns the round's score.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnexpectedPhase` outside of a round.
    pub fn submit_round(&mut self) -> Result<u8, QuizError> {
        match std::mem::replace(&mut self.phase, Phase::Setup) {
            Phase::Round {
                mut session,
                mut record,
            } => {
                let score = score_round(&mut record);
                let number = record.number();
                info!(round = %number, score, total = record.len(), "round submitted");
                session.record_round(record);

                match number.next() {
                    Some(upcoming) => self.enter_study(session, upcoming),
                    None => {
                        info!(week = %session.week(), "quiz complete");
                        self.phase = Phase::Summary { session };
                    }
                }
                Ok(score)
            }
            other => {
                let phase = other.kind();
                self.phase = other;
                Err(QuizError::UnexpectedPhase {
                    action: QuizAction::SubmitRound,
                    phase,
                })
            }
        }
    }

    /// Drops the session and returns to setup. Valid from any phase.
    pub fn restart(&mut self) {
        if let Some(session) = self.phase.session() {
            info!(week = %session.week(), rounds = session.rounds().len(), "quiz restarted");
        }
        self.phase = Phase::Setup;
    }

    /// Everything a presentation layer needs to draw the current state.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        let screen = match &self.phase {
            Phase::Setup => Screen::Setup,
            Phase::Study {
                session,
                upcoming,
                cursor,
            } => {
                let pair = session.pairs()[*cursor];
                Screen::Study {
                    left: pair.left(),
                    right: pair.right(),
                    position: *cursor,
                    total: session.pair_count(),
                    upcoming: *upcoming,
                }
            }
            Phase::Round { record, .. } => Screen::Round {
                number: record.number(),
                items: record
                    .entries()
                    .iter()
                    .enumerate()
                    .map(|(position, entry)| RoundItem::from_entry(position, entry))
                    .collect(),
            },
            Phase::Summary { session } => Screen::Summary {
                week: session.week(),
                wordset: session.wordset(),
                scores: session.rounds().iter().map(RoundScore::from).collect(),
            },
        };

        QuizSnapshot {
            phase: self.phase.kind(),
            label: self.label(),
            progress: self.progress(),
            screen,
        }
    }

    fn expect_phase(&self, action: QuizAction, expected: PhaseKind) -> Result<(), QuizError> {
        let phase = self.phase.kind();
        if phase == expected {
            Ok(())
        } else {
            Err(QuizError::UnexpectedPhase { action, phase })
        }
    }

    fn enter_study(&mut self, session: Session, upcoming: RoundNumber) {
        self.study_epoch = self.study_epoch.wrapping_add(1);
        debug!(epoch = self.study_epoch, round = %upcoming, "study started");
        self.phase = Phase::Study {
            session,
            upcoming,
            cursor: 0,
        };
    }

    fn advance_study(&mut self) {
        let Phase::Study {
            session,
            upcoming,
            cursor,
        } = &mut self.phase
        else {
            return;
        };

        *cursor += 1;
        debug!(cursor = *cursor, total = session.pair_count(), "study advanced");
        if *cursor < session.pair_count() {
            return;
        }

        let upcoming = *upcoming;
        if let Phase::Study { session, .. } = std::mem::replace(&mut self.phase, Phase::Setup) {
            self.begin_round(session, upcoming);
        }
    }

    fn begin_round(&mut self, session: Session, number: RoundNumber) {
        let indices: Vec<usize> = (0..session.pair_count()).collect();
        let order = shuffled(&indices, &mut self.rng);
        let entries = order
            .into_iter()
            .map(|index| {
                let cue_side = CueSide::from_coin(self.rng.random_bool(0.5));
                RoundEntry::new(index, session.pairs()[index], cue_side)
            })
            .collect();

        info!(round = %number, "round started");
        self.phase = Phase::Round {
            session,
            record: RoundRecord::new(number, entries),
        };
    }
}

impl Default for QuizController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("phase", &self.phase.kind())
            .field("session", &self.phase.session())
            .field("study_epoch", &self.study_epoch)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
