use dioxus::prelude::*;

use services::ApiError;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuestionRowVm, ResultSummaryVm, map_result};

#[component]
pub fn ResultView() -> Element {
    let ctx = use_context::<AppContext>();

    // No caching: every mount (and every retry) re-runs both calls.
    let results = ctx.results();
    let mut resource = use_resource(move || {
        let results = results.clone();
        async move {
            match results.latest_result().await {
                Ok(result) => Ok(map_result(&result)),
                Err(ApiError::NotFound(text) | ApiError::InvalidResponse(text)) => {
                    Err(ViewError::Message(text))
                }
                Err(ApiError::Unreachable) => Err(ViewError::Message(
                    "Unable to reach the server. Please check if the backend is running."
                        .to_owned(),
                )),
                Err(_) => Err(ViewError::Message(
                    "Server error. Please try again later.".to_owned(),
                )),
            }
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page result",
            h2 { "Quiz Results" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Grading your submission..." }
                },
                ViewState::Ready(summary) => rsx! {
                    ResultSummary { summary }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "banner error",
                        p { "{err.message()}" }
                        button { onclick: move |_| resource.restart(), "Try Again" }
                    }
                },
            }
        }
    }
}

#[component]
fn ResultSummary(summary: ResultSummaryVm) -> Element {
    let verdict_class = if summary.passed { "verdict pass" } else { "verdict fail" };
    rsx! {
        header { class: "score-header",
            p { class: "score", "You scored {summary.score} out of {summary.total}" }
            p { class: "percentage", "{summary.percentage_str}" }
            p { class: "{verdict_class}", "{summary.verdict()}" }
        }
        ol { class: "question-list",
            for row in summary.rows {
                QuestionRow { row }
            }
        }
    }
}

#[component]
fn QuestionRow(row: QuestionRowVm) -> Element {
    let row_class = if row.is_correct { "question correct" } else { "question wrong" };
    rsx! {
        li { class: "{row_class}",
            p { class: "question-text", "{row.question}" }
            p { class: "your-answer", "Your answer: {row.user_answer}" }
            if let Some(correct) = row.correction {
                p { class: "correct-answer", "Correct answer: {correct}" }
            }
        }
    }
}
