use std::fmt;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::error::QuizError;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// One pacing step for the study phase identified by `epoch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StudyTick {
    epoch: u64,
}

impl StudyTick {
    #[must_use]
    pub fn new(epoch: u64) -> Self {
        Self { epoch }
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Owner of the single repeating study timer.
///
/// Starting always cancels the previous timer first; dropping the pacer cancels it too.
#[derive(Default)]
pub struct StudyPacer {
    task: Option<JoinHandle<()>>,
    epoch: Option<u64>,
}

impl StudyPacer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a tick for `epoch` into `sink` every `interval`, the first one after a full
    /// interval. The timer stops once `sink` returns `false`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::PacerUnavailable` when called outside a tokio runtime. Any
    /// previous timer is cancelled either way.
    pub fn start<F>(&mut self, epoch: u64, interval: Duration, sink: F) -> Result<(), QuizError>
    where
        F: Fn(StudyTick) -> bool + Send + 'static,
    {
        self.cancel();
        let handle = Handle::try_current().map_err(|_| QuizError::PacerUnavailable)?;
        let interval = interval.max(MIN_INTERVAL);

        let task = handle.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if !sink(StudyTick::new(epoch)) {
                    debug!(epoch, "tick sink closed, stopping pacer");
                    break;
                }
            }
        });

        debug!(epoch, ?interval, "pacer started");
        self.task = Some(task);
        self.epoch = Some(epoch);
        Ok(())
    }

    /// Stops the timer, if one is running.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!(epoch = self.epoch, "pacer cancelled");
        }
        self.epoch = None;
    }

    /// Epoch of the timer last started and not cancelled since.
    #[must_use]
    pub fn epoch(&self) -> Option<u64> {
        self.epoch
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for StudyPacer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for StudyPacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudyPacer")
            .field("epoch", &self.epoch)
            .field("running", &self.is_running())
            .finish()
    }
}
