use dioxus::prelude::*;

use crate::vm::{
    QuizIntent, RoundVm, STUDY_SKIP_ID, SUMMARY_RESTART_ID, StudyVm, SummaryVm, WEEK_INPUT_ID,
};

#[component]
pub(super) fn ProgressBar(percent: u8, fill_style: String) -> Element {
    rsx! {
        div { class: "progress", title: "{percent}%",
            div { class: "progress__fill", style: "{fill_style}" }
        }
    }
}

#[component]
pub(super) fn SetupPanel(
    week: String,
    error: Option<&'static str>,
    on_intent: Callback<QuizIntent>,
) -> Element {
    rsx! {
        section { class: "panel panel--setup", id: "setup-section",
            h2 { class: "panel__title", "Which week are you on?" }
            label { class: "setup__label", r#for: WEEK_INPUT_ID, "Week number" }
            input {
                id: WEEK_INPUT_ID,
                class: "setup__input",
                r#type: "text",
                autocomplete: "off",
                value: "{week}",
                oninput: move |evt: FormEvent| on_intent.call(QuizIntent::EditWeek(evt.value())),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.data.key() == Key::Enter {
                        evt.prevent_default();
                        on_intent.call(QuizIntent::Start);
                    }
                },
            }
            if let Some(message) = error {
                p { class: "setup__error", role: "alert", "{message}" }
            }
            button {
                id: "setup-start",
                class: "btn btn--primary",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "Start"
            }
        }
    }
}

#[component]
pub(super) fn StudyPanel(study: StudyVm, on_intent: Callback<QuizIntent>) -> Element {
    rsx! {
        section { class: "panel panel--study", id: "study-section",
            p { class: "study__counter", "{study.counter}" }
            div { class: "study__pair",
                span { class: "study__word", id: "study-left", "{study.left}" }
                span { class: "study__link", "\u{2194}" }
                span { class: "study__word", id: "study-right", "{study.right}" }
            }
            p { class: "study__next", "{study.upcoming}" }
            button {
                id: STUDY_SKIP_ID,
                class: "btn",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::SkipStudy),
                "Skip"
            }
        }
    }
}

#[component]
pub(super) fn RoundPanel(round: RoundVm, on_intent: Callback<QuizIntent>) -> Element {
    rsx! {
        section { class: "panel panel--round", id: "round-section",
            h2 { class: "panel__title", "{round.title}" }
            p { class: "round__hint", "Type the word that was paired with each cue." }
            ol { class: "round__items",
                {round.items.into_iter().map(|item| {
                    let position = item.position;
                    rsx! {
                        li { key: "{item.input_id}", class: "round-item",
                            label {
                                class: "round-item__cue",
                                r#for: "{item.input_id}",
                                "{item.cue}"
                            }
                            input {
                                id: "{item.input_id}",
                                class: "round-item__input",
                                r#type: "text",
                                autocomplete: "off",
                                value: "{item.answer}",
                                oninput: move |evt: FormEvent| {
                                    on_intent.call(QuizIntent::EditAnswer {
                                        position,
                                        text: evt.value(),
                                    });
                                },
                                onkeydown: move |evt: KeyboardEvent| {
                                    if evt.data.key() == Key::Enter {
                                        evt.prevent_default();
                                        on_intent.call(QuizIntent::AdvanceFocus(position));
                                    }
                                },
                            }
                        }
                    }
                })}
            }
            button {
                id: "round-submit",
                class: "btn btn--primary",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::SubmitRound),
                "Submit"
            }
        }
    }
}

#[component]
pub(super) fn SummaryPanel(summary: SummaryVm, on_intent: Callback<QuizIntent>) -> Element {
    rsx! {
        section { class: "panel panel--summary", id: "summary-section",
            h2 { class: "panel__title", "Results" }
            p { class: "summary__heading", "{summary.heading}" }
            ul { class: "summary__scores",
                for row in summary.scores {
                    li { key: "{row.label}", class: "summary__score",
                        div { class: "summary__row",
                            span { class: "summary__round", "{row.label}" }
                            span { class: "summary__value", "{row.value}" }
                        }
                        ul { class: "summary__review",
                            for entry in row.entries.iter() {
                                li { class: "{entry.class}",
                                    span { class: "review-item__cue", "{entry.cue}" }
                                    span { class: "review-item__answer", "{entry.answer}" }
                                    span { class: "review-item__target", "{entry.target}" }
                                }
                            }
                        }
                    }
                }
            }
            button {
                id: SUMMARY_RESTART_ID,
                class: "btn btn--primary",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Start over"
            }
        }
    }
}
