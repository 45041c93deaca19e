mod controller;
mod pacer;
mod phase;
mod progress;
mod session;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use controller::QuizController;
pub use pacer::{StudyPacer, StudyTick};
pub use phase::{PhaseKind, QuizAction};
pub use session::Session;
pub use view::{QuizSnapshot, ReviewedEntry, RoundItem, RoundScore, Screen};
pub use workflow::{QuizLoop, TickSink};
