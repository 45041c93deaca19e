mod quiz_vm;

pub use quiz_vm::{
    QuizIntent, QuizScreenVm, ReviewedEntryVm, RoundItemVm, RoundVm, STUDY_SKIP_ID,
    SUMMARY_RESTART_ID, ScoreRowVm, ScreenVm, StudyVm, SummaryVm, WEEK_INPUT_ID, map_quiz_screen,
    round_input_id,
};
