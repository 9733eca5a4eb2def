use dioxus::prelude::*;
use dioxus_router::use_navigator;

use eduquiz_core::model::{ClassroomDraft, Difficulty, DocumentFile};
use services::ApiError;

use crate::context::{AppContext, AuthState};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ClassroomCardVm, map_classroom_card, map_classroom_cards};

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    cards: Vec<ClassroomCardVm>,
}

#[component]
pub fn TeacherDashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut auth = use_context::<Signal<AuthState>>();
    let nav = use_navigator();

    // Guard: the redirect target is fixed, and the auth page is public,
    // so an expired session causes exactly one redirect.
    use_effect(move || {
        if !auth.read().is_authenticated() {
            nav.replace(Route::TeacherAuth {});
        }
    });
    let Some(session) = auth().session().cloned() else {
        return rsx! {};
    };
    let teacher_name = session.name().to_owned();
    let initial = teacher_name.chars().next().unwrap_or('?');

    // Classrooms created in this visit, appended after the fetched list.
    let mut added = use_signal(Vec::<ClassroomCardVm>::new);

    let classrooms = ctx.classrooms();
    let auth_service = ctx.auth();
    let list_teacher = teacher_name.clone();
    let mut resource = use_resource(move || {
        let classrooms = classrooms.clone();
        let auth_service = auth_service.clone();
        let teacher = list_teacher.clone();
        async move {
            match classrooms.list_for(&teacher).await {
                Ok(list) => Ok(DashboardData {
                    cards: map_classroom_cards(&list),
                }),
                Err(err) if err.is_unauthorized() => {
                    let _ = auth_service.invalidate().await;
                    auth.set(AuthState::Anonymous);
                    Err(ViewError::Unauthorized)
                }
                Err(ApiError::Unreachable) => Err(ViewError::Message(
                    "Unable to reach the server. Please check if the backend is running."
                        .to_owned(),
                )),
                Err(_) => Err(ViewError::Message(
                    "Failed to load classrooms. Please try again.".to_owned(),
                )),
            }
        }
    });
    let state = view_state_from_resource(&resource);

    let logout_service = ctx.auth();
    let on_logout = move |_| {
        let auth_service = logout_service.clone();
        spawn(async move {
            let _ = auth_service.logout().await;
            auth.set(AuthState::Anonymous);
        });
    };

    let mut show_modal = use_signal(|| false);

    rsx! {
        div { class: "page dashboard",
            header { class: "dashboard-header",
                span { class: "avatar", "{initial}" }
                h2 { "Welcome, {teacher_name}" }
                button { class: "logout", onclick: on_logout, "Log out" }
            }

            div { class: "dashboard-actions",
                button { onclick: move |_| show_modal.set(true), "Create Classroom" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading classrooms..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.cards.is_empty() && added().is_empty() {
                        p { class: "empty", "No classrooms yet. Create your first one." }
                    } else {
                        ul { class: "classroom-list",
                            for card in data.cards {
                                ClassroomCard { card }
                            }
                            for card in added() {
                                ClassroomCard { card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "banner error",
                        p { "{err.message()}" }
                        if err != ViewError::Unauthorized {
                            button { onclick: move |_| resource.restart(), "Retry" }
                        }
                    }
                },
            }

            if show_modal() {
                CreateClassroomModal {
                    teacher: teacher_name.clone(),
                    on_created: move |card: ClassroomCardVm| {
                        added.write().push(card);
                        show_modal.set(false);
                    },
                    on_close: move |()| show_modal.set(false),
                }
            }
        }
    }
}

#[component]
fn ClassroomCard(card: ClassroomCardVm) -> Element {
    rsx! {
        li { class: "classroom-card",
            div { class: "card-title",
                h3 { "{card.name}" }
                span { class: "status-badge", "{card.status}" }
            }
            p { class: "subject", "{card.subject}" }
            if !card.description.is_empty() {
                p { class: "description", "{card.description}" }
            }
            p { class: "meta",
                "{card.student_count} students | {card.quiz_count} quizzes | Created {card.created_str}"
            }
        }
    }
}

#[component]
fn CreateClassroomModal(
    teacher: String,
    on_created: EventHandler<ClassroomCardVm>,
    on_close: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut auth = use_context::<Signal<AuthState>>();

    let mut name = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut student_emails = use_signal(String::new);
    let mut difficulty = use_signal(|| Difficulty::default().as_str().to_owned());
    let mut num_questions = use_signal(|| "5".to_owned());
    let mut document = use_signal(|| None::<DocumentFile>);
    let mut form_error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let on_file = move |evt: FormEvent| async move {
        if let Some(file) = evt.files().into_iter().next() {
            let file_name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => {
                    document.set(Some(DocumentFile {
                        mime_type: mime_for_name(&file_name).to_owned(),
                        file_name,
                        bytes: bytes.to_vec(),
                    }));
                    form_error.set(None);
                }
                Err(_) => form_error.set(Some("Could not read the selected file.".to_owned())),
            }
        }
    };

    let classrooms = ctx.classrooms();
    let auth_service = ctx.auth();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        form_error.set(None);

        let draft = ClassroomDraft {
            name: name(),
            subject: subject(),
            description: description(),
            document: document(),
            student_emails: student_emails(),
            difficulty: difficulty(),
            num_questions: num_questions(),
        };
        let request = match draft.validate() {
            Ok(request) => request,
            Err(err) => {
                form_error.set(Some(err.message().to_owned()));
                return;
            }
        };

        busy.set(true);
        let classrooms = classrooms.clone();
        let auth_service = auth_service.clone();
        let teacher = teacher.clone();
        spawn(async move {
            match classrooms.create(&teacher, request).await {
                Ok(classroom) => {
                    on_created.call(map_classroom_card(&classroom));
                }
                Err(err) if err.is_unauthorized() => {
                    let _ = auth_service.invalidate().await;
                    auth.set(AuthState::Anonymous);
                }
                Err(ApiError::Unreachable) => form_error.set(Some(
                    "Unable to reach the server. Please check if the backend is running."
                        .to_owned(),
                )),
                Err(ApiError::BadRequest(text) | ApiError::NotFound(text)) => {
                    form_error.set(Some(text));
                }
                Err(_) => form_error.set(Some("Server error. Please try again later.".to_owned())),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                h3 { "Create Classroom" }

                if let Some(text) = form_error() {
                    p { class: "banner error", "{text}" }
                }

                form { onsubmit: on_submit,
                    label { "Classroom Name"
                        input {
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    label { "Subject"
                        input {
                            value: "{subject}",
                            oninput: move |evt| subject.set(evt.value()),
                        }
                    }
                    label { "Description"
                        textarea {
                            value: "{description}",
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                    label { "Lesson Document (PDF, DOC, DOCX)"
                        input {
                            r#type: "file",
                            accept: ".pdf,.doc,.docx",
                            onchange: on_file,
                        }
                    }
                    if let Some(doc) = document() {
                        p { class: "file-name", "Selected: {doc.file_name}" }
                    }
                    label { "Student Emails (one per line)"
                        textarea {
                            value: "{student_emails}",
                            oninput: move |evt| student_emails.set(evt.value()),
                        }
                    }
                    label { "Difficulty"
                        select {
                            value: "{difficulty}",
                            onchange: move |evt| difficulty.set(evt.value()),
                            for level in Difficulty::ALL {
                                option { value: level.as_str(), "{level.label()}" }
                            }
                        }
                    }
                    label { "Number of Questions"
                        input {
                            value: "{num_questions}",
                            oninput: move |evt| num_questions.set(evt.value()),
                        }
                    }

                    div { class: "modal-actions",
                        button { r#type: "submit", disabled: busy(),
                            if busy() { "Creating..." } else { "Create" }
                        }
                        button {
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

/// The backend validates by MIME type; map the picked file's extension
/// the same way a browser would. Unknown extensions fall through to a
/// type the draft validation rejects with its own message.
fn mime_for_name(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}
