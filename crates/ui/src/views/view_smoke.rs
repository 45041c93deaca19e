use services::{PhaseKind, QuizSettings, Screen};

use super::test_harness::{ViewHarness, setup_view_harness};
use crate::vm::QuizIntent;

fn start_week(harness: &mut ViewHarness, week: &str) {
    harness.dispatch(QuizIntent::EditWeek(week.to_string()));
    harness.dispatch(QuizIntent::Start);
}

fn skip_whole_study(harness: &mut ViewHarness) {
    for _ in 0..12 {
        harness.dispatch(QuizIntent::SkipStudy);
    }
}

fn current_targets(harness: &ViewHarness) -> Vec<&'static str> {
    harness.with_quiz(|quiz| {
        quiz.controller()
            .round()
            .map(|record| record.entries().iter().map(|entry| entry.target()).collect())
            .unwrap_or_default()
    })
}

#[tokio::test(flavor = "current_thread")]
async fn setup_view_smoke_renders_week_form() {
    let harness = setup_view_harness(QuizSettings::default(), Some("3"));
    let html = harness.render();

    assert!(html.contains("Setup"), "missing phase label in {html}");
    assert!(html.contains("week-input"), "missing week input in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
    assert!(html.contains("width: 0%;"), "progress should be empty in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn invalid_week_shows_message_and_stays_on_setup() {
    let mut harness = setup_view_harness(QuizSettings::default(), None);

    for raw in ["0", "", "abc", "-2"] {
        start_week(&mut harness, raw);
        let html = harness.render();
        assert!(
            html.contains("Please enter a valid week number (1 or higher)."),
            "missing validation message for {raw:?} in {html}"
        );
        assert_eq!(harness.with_quiz(|quiz| quiz.phase()), PhaseKind::Setup);
    }

    start_week(&mut harness, "2");
    let html = harness.render();
    assert!(!html.contains("Please enter a valid week number"), "stale message in {html}");
    assert_eq!(harness.with_quiz(|quiz| quiz.phase()), PhaseKind::Study);
}

#[tokio::test(flavor = "current_thread")]
async fn editing_the_week_clears_the_validation_message() {
    let mut harness = setup_view_harness(QuizSettings::default(), None);
    start_week(&mut harness, "0");
    assert!(harness.render().contains("Please enter a valid week number"));

    harness.dispatch(QuizIntent::EditWeek("5".to_string()));
    let html = harness.render();
    assert!(!html.contains("Please enter a valid week number"), "stale message in {html}");
    assert!(html.contains(r#"value="5""#), "typed week should stay in {html}");
    assert_eq!(harness.with_quiz(|quiz| quiz.phase()), PhaseKind::Setup);
}

#[tokio::test(flavor = "current_thread")]
async fn restart_clears_a_prefilled_week() {
    let mut harness = setup_view_harness(QuizSettings::default(), Some("3"));
    let html = harness.render();
    assert!(html.contains(r#"value="3""#), "missing prefilled week in {html}");

    harness.dispatch(QuizIntent::Start);
    assert_eq!(harness.with_quiz(|quiz| quiz.phase()), PhaseKind::Study);

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("week-input"), "missing week input in {html}");
    assert!(!html.contains(r#"value="3""#), "prefilled week should be cleared in {html}");
    assert_eq!(harness.with_quiz(|quiz| quiz.phase()), PhaseKind::Setup);
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_shows_pair_and_skip_advances() {
    let mut harness = setup_view_harness(QuizSettings::default(), None);
    start_week(&mut harness, "1");

    let html = harness.render();
    assert!(html.contains("Pair 1 of 12"), "missing counter in {html}");
    assert!(html.contains("Round 1 follows"), "missing upcoming round in {html}");
    let (left, right) = harness.with_quiz(|quiz| match quiz.snapshot().screen {
        Screen::Study { left, right, .. } => (left, right),
        other => panic!("expected study screen, got {other:?}"),
    });
    assert!(html.contains(left) && html.contains(right), "missing pair in {html}");

    harness.dispatch(QuizIntent::SkipStudy);
    let html = harness.render();
    assert!(html.contains("Pair 2 of 12"), "skip should advance one pair in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn full_quiz_smoke_reaches_summary_and_restarts() {
    let mut harness = setup_view_harness(QuizSettings::default(), None);
    start_week(&mut harness, "1");
    skip_whole_study(&mut harness);

    let html = harness.render();
    assert!(html.contains("Round 1"), "missing round label in {html}");
    assert!(html.contains("round-input-11"), "missing twelfth input in {html}");

    for (position, target) in current_targets(&harness).into_iter().enumerate() {
        harness.dispatch(QuizIntent::EditAnswer {
            position,
            text: format!(" {} ", target.to_uppercase()),
        });
    }
    harness.dispatch(QuizIntent::SubmitRound);
    assert_eq!(harness.with_quiz(|quiz| quiz.phase()), PhaseKind::Study);

    skip_whole_study(&mut harness);
    let html = harness.render();
    assert!(html.contains("Round 2"), "missing second round in {html}");
    assert!(html.contains("width: 33%;"), "progress after one round in {html}");
    harness.dispatch(QuizIntent::SubmitRound);

    skip_whole_study(&mut harness);
    harness.dispatch(QuizIntent::SubmitRound);

    let html = harness.render();
    assert!(html.contains("Summary"), "missing summary label in {html}");
    assert!(html.contains("Week 1"), "missing week in {html}");
    assert!(html.contains("12/12"), "missing first score in {html}");
    assert_eq!(html.matches("0/12").count(), 2, "expected two empty rounds in {html}");
    assert!(html.contains("width: 100%;"), "progress should be full in {html}");
    assert_eq!(html.matches("review-item--correct").count(), 12, "round one review in {html}");
    assert_eq!(html.matches("review-item--incorrect").count(), 24, "blank rounds in {html}");
    assert_eq!(html.matches("(blank)").count(), 24, "blank answers in {html}");

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Setup"), "restart should show setup in {html}");
    assert!(html.contains("week-input"), "restart should show the week input in {html}");
    assert!(!html.contains(r#"value="1""#), "week input should be empty in {html}");
    assert!(!html.contains("12/12"), "scores should be gone in {html}");
    assert_eq!(harness.with_quiz(|quiz| quiz.phase()), PhaseKind::Setup);
    assert!(harness.with_quiz(|quiz| quiz.controller().session().is_none()));
}

#[tokio::test(flavor = "current_thread")]
async fn study_timer_ticks_reach_the_round_without_skipping() {
    let settings = QuizSettings::from_millis(1).expect("valid interval");
    let mut harness = setup_view_harness(settings, None);
    start_week(&mut harness, "2");

    for _ in 0..200 {
        if harness.with_quiz(|quiz| quiz.phase()) == PhaseKind::Round {
            break;
        }
        harness.drive_async().await;
    }

    assert_eq!(harness.with_quiz(|quiz| quiz.phase()), PhaseKind::Round);
    let html = harness.render();
    assert!(html.contains("Round 1"), "timer should open round one in {html}");
}
