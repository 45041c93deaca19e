use std::fmt;

/// Coarse phase of the quiz, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Setup,
    Study,
    Round,
    Summary,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhaseKind::Setup => "setup",
            PhaseKind::Study => "study",
            PhaseKind::Round => "round",
            PhaseKind::Summary => "summary",
        };
        f.write_str(name)
    }
}

/// User actions that are only valid in some phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizAction {
    Start,
    SkipStudy,
    Answer,
    SubmitRound,
}

impl fmt::Display for QuizAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizAction::Start => "start",
            QuizAction::SkipStudy => "skip study",
            QuizAction::Answer => "answer",
            QuizAction::SubmitRound => "submit round",
        };
        f.write_str(name)
    }
}
