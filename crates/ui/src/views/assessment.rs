use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use quiz_core::model::ScaleValue;
use services::{AdvanceOutcome, Phase, QuizSession};

use crate::routes::Route;
use crate::vm::{progress_label, progress_percent};

#[component]
pub fn AssessmentView() -> Element {
    let mut session = use_context::<Signal<QuizSession>>();
    let navigator = use_navigator();

    let (total, position, phase) = {
        let s = session.read();
        (s.total(), s.position(), s.phase())
    };

    if total == 0 {
        return rsx! {
            div { class: "page",
                p { class: "empty", "No statements are available." }
            }
        };
    }

    if phase == Phase::Reporting {
        return rsx! {
            div { class: "page",
                div { class: "card card--done",
                    h2 { "All {total} statements answered" }
                    p { "Your report is ready." }
                    Link { class: "button", to: Route::Results {}, "See results" }
                    button {
                        class: "button button--ghost",
                        onclick: move |_| session.write().restart(),
                        "Start over"
                    }
                }
            }
        };
    }

    let (statement_text, selected) = {
        let s = session.read();
        let statement = s.current();
        (
            statement.map(|st| st.text().to_string()).unwrap_or_default(),
            statement.and_then(|st| s.response_for(st.id())),
        )
    };
    let answered: Vec<bool> = {
        let s = session.read();
        s.statements()
            .iter()
            .map(|st| s.response_for(st.id()).is_some())
            .collect()
    };
    let percent = progress_percent(position, total);

    rsx! {
        div { class: "page",
            div { class: "progress",
                span { class: "progress__label", {progress_label(position, total)} }
                div { class: "progress__track",
                    div { class: "progress__fill", style: "width: {percent}%" }
                }
            }

            div { class: "card",
                p { class: "statement", "{statement_text}" }

                div { class: "scale",
                    for value in ScaleValue::ALL {
                        button {
                            class: if selected == Some(value) { "scale__option scale__option--selected" } else { "scale__option" },
                            onclick: move |_| session.write().select_answer(value),
                            span { class: "scale__value", "{value.value()}" }
                            span { class: "scale__label", "{value.label()}" }
                        }
                    }
                }

                div { class: "card__actions",
                    button {
                        class: "button button--ghost",
                        disabled: position == 0,
                        onclick: move |_| session.write().retreat(),
                        "Previous"
                    }
                    button {
                        class: "button",
                        disabled: selected.is_none(),
                        onclick: move |_| {
                            if session.write().advance() == AdvanceOutcome::Completed {
                                navigator.push(Route::Results {});
                            }
                        },
                        if position + 1 == total { "Finish" } else { "Next" }
                    }
                }
            }

            // One dot per statement, in presentation order. Jumping to an
            // answered statement lets the reader revise it.
            nav { class: "dots",
                for (index, is_answered) in answered.into_iter().enumerate() {
                    button {
                        class: if index == position {
                            "dot dot--current"
                        } else if is_answered {
                            "dot dot--answered"
                        } else {
                            "dot"
                        },
                        onclick: move |_| {
                            session.write().jump_to(index);
                        },
                        "{index + 1}"
                    }
                }
            }
        }
    }
}
