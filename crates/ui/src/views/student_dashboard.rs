use dioxus::prelude::*;
use dioxus_router::Link;

use eduquiz_core::model::StudentClassroom;
use services::ApiError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState};

#[component]
pub fn StudentDashboardView() -> Element {
    let ctx = use_context::<AppContext>();

    let mut email = use_signal(String::new);
    let mut state = use_signal(|| ViewState::<Vec<StudentClassroom>>::Idle);

    let students = ctx.students();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if matches!(state(), ViewState::Loading) {
            return;
        }
        let address = email().trim().to_owned();
        if address.is_empty() {
            state.set(ViewState::Error(ViewError::Message(
                "Please enter your email address.".to_owned(),
            )));
            return;
        }
        state.set(ViewState::Loading);
        let students = students.clone();
        spawn(async move {
            match students.lookup(&address).await {
                Ok(classrooms) => state.set(ViewState::Ready(classrooms)),
                Err(ApiError::NotFound(text)) => {
                    state.set(ViewState::Error(ViewError::Message(text)));
                }
                Err(ApiError::Unreachable) => state.set(ViewState::Error(ViewError::Message(
                    "Unable to reach the server. Please check if the backend is running."
                        .to_owned(),
                ))),
                Err(_) => state.set(ViewState::Error(ViewError::Message(
                    "Server error. Please try again later.".to_owned(),
                ))),
            }
        });
    };

    rsx! {
        div { class: "page student",
            h2 { "Student Login" }
            p { "Enter the email your teacher registered you with." }

            form { class: "lookup", onsubmit: on_submit,
                input {
                    value: "{email}",
                    placeholder: "you@school.edu",
                    oninput: move |evt| email.set(evt.value()),
                }
                button { r#type: "submit", disabled: matches!(state(), ViewState::Loading),
                    "Find my classrooms"
                }
            }

            match state() {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { "Looking up your classrooms..." }
                },
                ViewState::Ready(classrooms) => rsx! {
                    p { class: "notice", "Login successful! Here are your classrooms." }
                    ul { class: "classroom-list",
                        for classroom in classrooms {
                            StudentClassroomCard { classroom }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "banner error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn StudentClassroomCard(classroom: StudentClassroom) -> Element {
    rsx! {
        li { class: "classroom-card",
            h3 { "{classroom.name}" }
            p { class: "subject", "{classroom.subject}" }
            if classroom.quizzes.is_empty() {
                p { class: "empty", "No quizzes yet." }
            } else {
                ul { class: "quiz-list",
                    for quiz in classroom.quizzes {
                        li { class: "quiz-row",
                            span { "{quiz.title}" }
                            if quiz.is_launchable() {
                                Link {
                                    class: "launch",
                                    to: Route::UploadFace { quiz_id: quiz.id.as_str().to_owned() },
                                    "Take quiz"
                                }
                            } else {
                                span { class: "unavailable", "Not available yet" }
                            }
                        }
                    }
                }
            }
        }
    }
}
