use std::fmt;
use std::sync::Arc;

use tracing::warn;

use super::controller::QuizController;
use super::pacer::{StudyPacer, StudyTick};
use super::phase::PhaseKind;
use super::view::QuizSnapshot;
use crate::error::QuizError;
use crate::settings::QuizSettings;

/// Destination of pacing ticks. Returns `false` once nobody listens anymore.
pub type TickSink = Arc<dyn Fn(StudyTick) -> bool + Send + Sync>;

/// Owns the controller together with the one study timer that drives it.
///
/// After every action the pacer is reconciled with [`QuizController::pacing`]: a new study
/// epoch restarts it, leaving study cancels it. Ticks travel through the sink to whoever
/// hosts the loop, who hands them back via [`QuizLoop::on_study_tick`].
pub struct QuizLoop {
    controller: QuizController,
    pacer: StudyPacer,
    settings: QuizSettings,
    sink: TickSink,
    /// Study epoch whose timer could not be started; skip drives it instead.
    pacing_unavailable: Option<u64>,
}

impl QuizLoop {
    #[must_use]
    pub fn new<F>(settings: QuizSettings, sink: F) -> Self
    where
        F: Fn(StudyTick) -> bool + Send + Sync + 'static,
    {
        Self {
            controller: QuizController::new(),
            pacer: StudyPacer::new(),
            settings,
            sink: Arc::new(sink),
            pacing_unavailable: None,
        }
    }

    /// Replace the controller, e.g. with a seeded one.
    #[must_use]
    pub fn with_controller(mut self, controller: QuizController) -> Self {
        self.controller = controller;
        self.sync_pacer();
        self
    }

    #[must_use]
    pub fn controller(&self) -> &QuizController {
        &self.controller
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn phase(&self) -> PhaseKind {
        self.controller.phase()
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.controller.snapshot()
    }

    /// Epoch of the running study timer, if any.
    #[must_use]
    pub fn pacer_epoch(&self) -> Option<u64> {
        self.pacer.epoch()
    }

    /// # Errors
    ///
    /// See [`QuizController::start`].
    pub fn start(&mut self, raw_week: &str) -> Result<(), QuizError> {
        let result = self.controller.start(raw_week);
        self.sync_pacer();
        result
    }

    pub fn on_study_tick(&mut self, tick: StudyTick) -> bool {
        let advanced = self.controller.on_study_tick(tick);
        self.sync_pacer();
        advanced
    }

    /// # Errors
    ///
    /// See [`QuizController::skip_study`].
    pub fn skip_study(&mut self) -> Result<(), QuizError> {
        let result = self.controller.skip_study();
        self.sync_pacer();
        result
    }

    /// # Errors
    ///
    /// See [`QuizController::set_answer`].
    pub fn set_answer(&mut self, position: usize, text: impl Into<String>) -> Result<(), QuizError> {
        self.controller.set_answer(position, text)
    }

    #[must_use]
    pub fn next_input(&self, position: usize) -> Option<usize> {
        self.controller.next_input(position)
    }

    /// # Errors
    ///
    /// See [`QuizController::submit_round`].
    pub fn submit_round(&mut self) -> Result<u8, QuizError> {
        let result = self.controller.submit_round();
        self.sync_pacer();
        result
    }

    pub fn restart(&mut self) {
        self.controller.restart();
        self.sync_pacer();
    }

    fn sync_pacer(&mut self) {
        match self.controller.pacing() {
            Some(epoch)
                if self.pacer.epoch() == Some(epoch) || self.pacing_unavailable == Some(epoch) => {}
            Some(epoch) => {
                let sink = Arc::clone(&self.sink);
                let started =
                    self.pacer
                        .start(epoch, self.settings.study_interval(), move |tick| sink(tick));
                if let Err(err) = started {
                    warn!(%err, epoch, "study pacing unavailable, use skip to advance");
                    self.pacing_unavailable = Some(epoch);
                }
            }
            None => self.pacer.cancel(),
        }
    }
}

impl fmt::Debug for QuizLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizLoop")
            .field("controller", &self.controller)
            .field("pacer", &self.pacer)
            .field("settings", &self.settings)
            .field("pacing_unavailable", &self.pacing_unavailable)
            .finish_non_exhaustive()
    }
}
