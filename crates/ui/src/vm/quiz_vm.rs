use recall_core::Verdict;
use services::{QuizSnapshot, ReviewedEntry, RoundItem, RoundScore, Screen};

pub const WEEK_INPUT_ID: &str = "week-input";
pub const STUDY_SKIP_ID: &str = "study-skip";
pub const SUMMARY_RESTART_ID: &str = "summary-restart";

/// DOM id of the answer input at `position` in presentation order.
#[must_use]
pub fn round_input_id(position: usize) -> String {
    format!("round-input-{position}")
}

/// Everything the quiz screen can ask of the loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    EditWeek(String),
    Start,
    SkipStudy,
    EditAnswer { position: usize, text: String },
    /// Enter pressed inside the answer input at this position.
    AdvanceFocus(usize),
    SubmitRound,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub phase_label: String,
    pub progress: u8,
    pub body: ScreenVm,
}

impl QuizScreenVm {
    /// Inline width for the progress bar fill.
    #[must_use]
    pub fn progress_style(&self) -> String {
        format!("width: {}%;", self.progress)
    }

    /// Element that should own focus right after this screen appears.
    #[must_use]
    pub fn focus_target(&self) -> Option<String> {
        match &self.body {
            ScreenVm::Setup => Some(WEEK_INPUT_ID.to_string()),
            ScreenVm::Study(_) => Some(STUDY_SKIP_ID.to_string()),
            ScreenVm::Round(round) => round.items.first().map(|item| item.input_id.clone()),
            ScreenVm::Summary(_) => Some(SUMMARY_RESTART_ID.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Setup,
    Study(StudyVm),
    Round(RoundVm),
    Summary(SummaryVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyVm {
    pub left: String,
    pub right: String,
    pub counter: String,
    pub upcoming: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundVm {
    pub title: String,
    pub items: Vec<RoundItemVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundItemVm {
    pub position: usize,
    pub input_id: String,
    pub cue: String,
    pub answer: String,
}

impl From<&RoundItem> for RoundItemVm {
    fn from(item: &RoundItem) -> Self {
        Self {
            position: item.position,
            input_id: round_input_id(item.position),
            cue: item.cue.to_string(),
            answer: item.answer.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub heading: String,
    pub scores: Vec<ScoreRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRowVm {
    pub label: String,
    pub value: String,
    pub entries: Vec<ReviewedEntryVm>,
}

impl From<&RoundScore> for ScoreRowVm {
    fn from(score: &RoundScore) -> Self {
        Self {
            label: format!("Round {}", score.round),
            value: format!("{}/{}", score.correct, score.total),
            entries: score.entries.iter().map(ReviewedEntryVm::from).collect(),
        }
    }
}

/// One scored cue on the summary, coloured by verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewedEntryVm {
    pub cue: String,
    pub target: String,
    pub answer: String,
    pub class: &'static str,
}

impl From<&ReviewedEntry> for ReviewedEntryVm {
    fn from(entry: &ReviewedEntry) -> Self {
        let answer = if entry.answer.is_empty() {
            "(blank)".to_string()
        } else {
            entry.answer.clone()
        };
        Self {
            cue: entry.cue.to_string(),
            target: entry.target.to_string(),
            answer,
            class: verdict_class(entry.verdict),
        }
    }
}

fn verdict_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "review-item review-item--correct",
        Verdict::Incorrect => "review-item review-item--incorrect",
    }
}

#[must_use]
pub fn map_quiz_screen(snapshot: &QuizSnapshot) -> QuizScreenVm {
    let body = match &snapshot.screen {
        Screen::Setup => ScreenVm::Setup,
        Screen::Study {
            left,
            right,
            position,
            total,
            upcoming,
        } => ScreenVm::Study(StudyVm {
            left: (*left).to_string(),
            right: (*right).to_string(),
            counter: format!("Pair {} of {total}", position + 1),
            upcoming: format!("Round {upcoming} follows"),
        }),
        Screen::Round { number, items } => ScreenVm::Round(RoundVm {
            title: format!("Round {number}"),
            items: items.iter().map(RoundItemVm::from).collect(),
        }),
        Screen::Summary {
            week,
            wordset,
            scores,
        } => ScreenVm::Summary(SummaryVm {
            heading: format!("Week {week} \u{b7} {wordset}"),
            scores: scores.iter().map(ScoreRowVm::from).collect(),
        }),
    };

    QuizScreenVm {
        phase_label: snapshot.label.clone(),
        progress: snapshot.progress.min(100),
        body,
    }
}
