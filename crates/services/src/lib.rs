#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;
pub mod settings;
pub mod shuffle;

pub use error::{QuizError, SettingsError};
pub use quiz::{
    PhaseKind, QuizAction, QuizController, QuizLoop, QuizSnapshot, ReviewedEntry, RoundItem,
    RoundScore, Screen, Session, StudyPacer, StudyTick,
};
pub use settings::QuizSettings;
pub use shuffle::shuffled;
