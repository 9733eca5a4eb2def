//! The proctoring handoff sequence.
//!
//! Face upload, face check, and webcam check are stateless steps that
//! carry the quiz reference forward; the server does the actual
//! face-detection work once the hosted form is opened under camera.

use dioxus::prelude::*;
use dioxus_router::Link;

use eduquiz_core::model::QuizId;
use services::ApiError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn UploadFaceView(quiz_id: String) -> Element {
    rsx! {
        div { class: "page proctor",
            h2 { "Step 1 of 3: Upload your face" }
            p { "Position yourself in good lighting and keep your face centered." }
            Link { class: "continue", to: Route::FaceCheck { quiz_id }, "Continue" }
        }
    }
}

#[component]
pub fn FaceCheckView(quiz_id: String) -> Element {
    rsx! {
        div { class: "page proctor",
            h2 { "Step 2 of 3: Face check" }
            p { "Hold still while your face is matched against the upload." }
            Link { class: "continue", to: Route::WebcamCheck { quiz_id }, "Continue" }
        }
    }
}

#[component]
pub fn WebcamCheckView(quiz_id: String) -> Element {
    rsx! {
        div { class: "page proctor",
            h2 { "Step 3 of 3: Webcam check" }
            p { "Your webcam stays on for the whole quiz. Close other apps using the camera." }
            Link { class: "continue", to: Route::QuizForm { quiz_id }, "Start the quiz" }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct QuizHandoff {
    title: String,
    form_link: String,
}

/// Final step: resolve the externally hosted form for this quiz and hand
/// the student off to it.
#[component]
pub fn QuizFormView(quiz_id: String) -> Element {
    let ctx = use_context::<AppContext>();

    let students = ctx.students();
    let mut resource = use_resource(move || {
        let students = students.clone();
        let id = QuizId::new(quiz_id.clone());
        async move {
            let quiz = match students.quiz(&id).await {
                Ok(quiz) => quiz,
                Err(ApiError::NotFound(text)) => return Err(ViewError::Message(text)),
                Err(ApiError::Unreachable) => {
                    return Err(ViewError::Message(
                        "Unable to reach the server. Please check if the backend is running."
                            .to_owned(),
                    ));
                }
                Err(_) => {
                    return Err(ViewError::Message(
                        "Server error. Please try again later.".to_owned(),
                    ));
                }
            };
            match quiz.launch_url() {
                Some(url) => Ok(QuizHandoff {
                    title: quiz.title,
                    form_link: url.to_string(),
                }),
                None => Err(ViewError::Message(
                    "This quiz has no form link yet. Ask your teacher to regenerate it."
                        .to_owned(),
                )),
            }
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page proctor",
            h2 { "Your quiz" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Preparing your quiz..." }
                },
                ViewState::Ready(handoff) => rsx! {
                    p { "{handoff.title}" }
                    a { class: "launch", href: "{handoff.form_link}", "Open the quiz form" }
                    p { class: "hint",
                        "When you have submitted the form, come back here for your score."
                    }
                    Link { class: "continue", to: Route::Result {}, "View results" }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "banner error",
                        p { "{err.message()}" }
                        button { onclick: move |_| resource.restart(), "Retry" }
                    }
                },
            }
        }
    }
}
