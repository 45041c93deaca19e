use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use services::{QuizError, QuizLoop, StudyTick};
use tracing::{debug, warn};

use super::panels::{ProgressBar, RoundPanel, SetupPanel, StudyPanel, SummaryPanel};
use super::scripts::focus_element;
use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizScreenVm, ScreenVm, WEEK_INPUT_ID, map_quiz_screen, round_input_id};

/// Ticks leave the pacer task through `tx` and are drained by the view's own task.
#[derive(Clone)]
struct TickChannel {
    tx: UnboundedSender<StudyTick>,
    rx: Rc<RefCell<Option<UnboundedReceiver<StudyTick>>>>,
}

impl TickChannel {
    fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            tx,
            rx: Rc::new(RefCell::new(Some(rx))),
        }
    }

    fn take_receiver(&self) -> Option<UnboundedReceiver<StudyTick>> {
        self.rx.borrow_mut().take()
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let settings = ctx.quiz_settings();
    let initial_week = ctx.initial_week().unwrap_or_default().to_string();

    let ticks = use_hook(TickChannel::new);
    let mut quiz = use_signal({
        let tx = ticks.tx.clone();
        move || QuizLoop::new(settings, move |tick| tx.unbounded_send(tick).is_ok())
    });
    let mut week_text = use_signal(move || initial_week);
    let mut week_error = use_signal(|| None::<&'static str>);
    let mut last_focus = use_signal(|| None::<String>);

    use_future(move || {
        let receiver = ticks.take_receiver();
        let mut quiz = quiz;
        async move {
            let Some(mut receiver) = receiver else {
                return;
            };
            while let Some(tick) = receiver.next().await {
                quiz.write().on_study_tick(tick);
            }
        }
    });

    // Focus follows the phase; typing inside a round keeps the label and so keeps focus.
    use_effect(move || {
        let screen = map_quiz_screen(&quiz.read().snapshot());
        if last_focus.peek().as_deref() == Some(screen.phase_label.as_str()) {
            return;
        }
        last_focus.set(Some(screen.phase_label.clone()));
        if let Some(target) = screen.focus_target() {
            focus_element(&target);
        }
    });

    let dispatch = use_callback(move |intent: QuizIntent| match intent {
        QuizIntent::EditWeek(text) => {
            week_text.set(text);
            week_error.set(None);
        }
        QuizIntent::Start => {
            let raw = week_text.peek().clone();
            let result = quiz.write().start(&raw);
            match result {
                Ok(()) => week_error.set(None),
                Err(QuizError::InvalidWeek(err)) => {
                    week_error.set(Some(err.user_message()));
                    focus_element(WEEK_INPUT_ID);
                }
                Err(err) => warn!(%err, "start rejected"),
            }
        }
        QuizIntent::SkipStudy => {
            let result = quiz.write().skip_study();
            if let Err(err) = result {
                warn!(%err, "skip rejected");
            }
        }
        QuizIntent::EditAnswer { position, text } => {
            let result = quiz.write().set_answer(position, text);
            if let Err(err) = result {
                warn!(%err, "answer rejected");
            }
        }
        QuizIntent::AdvanceFocus(position) => {
            let next = quiz.peek().next_input(position);
            if let Some(next) = next {
                focus_element(&round_input_id(next));
            }
        }
        QuizIntent::SubmitRound => {
            let result = quiz.write().submit_round();
            match result {
                Ok(correct) => debug!(correct, "round submitted from view"),
                Err(err) => warn!(%err, "submit rejected"),
            }
        }
        QuizIntent::Restart => {
            quiz.write().restart();
            week_text.set(String::new());
            week_error.set(None);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, quiz);
            }
        }
    }

    let screen = map_quiz_screen(&quiz.read().snapshot());
    let fill_style = screen.progress_style();
    let QuizScreenVm {
        phase_label,
        progress,
        body,
    } = screen;

    rsx! {
        main { class: "quiz", id: "quiz-root",
            header { class: "quiz__header",
                span { class: "quiz__phase", id: "phase-label", "{phase_label}" }
                ProgressBar { percent: progress, fill_style }
            }
            match body {
                ScreenVm::Setup => rsx! {
                    SetupPanel { week: week_text(), error: week_error(), on_intent: dispatch }
                },
                ScreenVm::Study(study) => rsx! {
                    StudyPanel { study, on_intent: dispatch }
                },
                ScreenVm::Round(round) => rsx! {
                    RoundPanel { round, on_intent: dispatch }
                },
                ScreenVm::Summary(summary) => rsx! {
                    SummaryPanel { summary, on_intent: dispatch }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    quiz: Rc<RefCell<Option<Signal<QuizLoop>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, quiz: Signal<QuizLoop>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.quiz.borrow_mut() = Some(quiz);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn quiz(&self) -> Signal<QuizLoop> {
        (*self.quiz.borrow()).expect("quiz signal registered")
    }
}
