use dioxus::prelude::*;
use dioxus_router::use_navigator;

use eduquiz_core::auth::{FieldErrors, LoginForm, SignupForm};
use services::{ApiError, AuthServiceError};

use crate::context::{AppContext, AuthState};
use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormMode {
    Login,
    Signup,
}

#[component]
pub fn TeacherAuthView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut auth = use_context::<Signal<AuthState>>();
    let nav = use_navigator();

    let mut mode = use_signal(|| FormMode::Login);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut qualification = use_signal(String::new);

    let mut field_errors = use_signal(FieldErrors::default);
    let mut banner = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let auth_service = ctx.auth();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        banner.set(None);
        notice.set(None);
        let auth_service = auth_service.clone();
        match mode() {
            FormMode::Login => {
                let form = LoginForm {
                    name: name(),
                    email: email(),
                    password: password(),
                };
                let errors = form.validate();
                field_errors.set(errors);
                if !errors.is_empty() {
                    return;
                }
                busy.set(true);
                spawn(async move {
                    match auth_service.login(&form).await {
                        Ok(session) => {
                            auth.set(AuthState::Authenticated(session));
                            nav.replace(Route::TeacherDashboard {});
                        }
                        Err(err) => banner.set(Some(login_error_message(&err))),
                    }
                    busy.set(false);
                });
            }
            FormMode::Signup => {
                let form = SignupForm {
                    name: name(),
                    email: email(),
                    password: password(),
                    confirm_password: confirm_password(),
                    qualification: qualification(),
                };
                let errors = form.validate();
                field_errors.set(errors);
                if !errors.is_empty() {
                    return;
                }
                busy.set(true);
                spawn(async move {
                    match auth_service.signup(&form).await {
                        Ok(_) => {
                            notice.set(Some(
                                "Account created successfully! Please log in.".to_owned(),
                            ));
                            mode.set(FormMode::Login);
                            password.set(String::new());
                            confirm_password.set(String::new());
                            field_errors.set(FieldErrors::default());
                        }
                        Err(err) => banner.set(Some(signup_error_message(&err))),
                    }
                    busy.set(false);
                });
            }
        }
    };

    let signing_up = mode() == FormMode::Signup;
    let errors = field_errors();

    rsx! {
        div { class: "page auth",
            h2 {
                if signing_up { "Teacher Sign Up" } else { "Teacher Login" }
            }

            if let Some(text) = notice() {
                p { class: "notice", "{text}" }
            }
            if let Some(text) = banner() {
                p { class: "banner error", "{text}" }
            }

            form { onsubmit: on_submit,
                label { "Name"
                    input {
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                if let Some(message) = errors.name {
                    p { class: "field-error", "{message}" }
                }

                label { "Email"
                    input {
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                if let Some(message) = errors.email {
                    p { class: "field-error", "{message}" }
                }

                label { "Password"
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if let Some(message) = errors.password {
                    p { class: "field-error", "{message}" }
                }

                if signing_up {
                    label { "Confirm Password"
                        input {
                            r#type: "password",
                            value: "{confirm_password}",
                            oninput: move |evt| confirm_password.set(evt.value()),
                        }
                    }
                    if let Some(message) = errors.confirm_password {
                        p { class: "field-error", "{message}" }
                    }

                    label { "Qualification"
                        input {
                            value: "{qualification}",
                            oninput: move |evt| qualification.set(evt.value()),
                        }
                    }
                    if let Some(message) = errors.qualification {
                        p { class: "field-error", "{message}" }
                    }
                }

                button { r#type: "submit", disabled: busy(),
                    if busy() {
                        "Please wait..."
                    } else if signing_up {
                        "Sign Up"
                    } else {
                        "Log In"
                    }
                }
            }

            button {
                class: "link-button",
                onclick: move |_| {
                    mode.set(if signing_up { FormMode::Login } else { FormMode::Signup });
                    field_errors.set(FieldErrors::default());
                    banner.set(None);
                },
                if signing_up {
                    "Already have an account? Log in"
                } else {
                    "New here? Create an account"
                }
            }
        }
    }
}

fn login_error_message(err: &AuthServiceError) -> String {
    match err {
        AuthServiceError::Api(api) => match api {
            ApiError::BadRequest(text) => text.clone(),
            ApiError::Server(_) => "Server error. Please try again later.".to_owned(),
            ApiError::Unreachable => {
                "Unable to reach the server. Please check if the backend is running.".to_owned()
            }
            _ => "Invalid name, email, or password.".to_owned(),
        },
        _ => "Invalid name, email, or password.".to_owned(),
    }
}

fn signup_error_message(err: &AuthServiceError) -> String {
    match err {
        AuthServiceError::Api(api) => match api {
            ApiError::Conflict(_) => {
                "Email already registered. Please use a different email.".to_owned()
            }
            ApiError::BadRequest(text) => text.clone(),
            ApiError::Server(_) => "Server error. Please try again later.".to_owned(),
            ApiError::Unreachable => {
                "Unable to reach the server. Please check if the backend is running.".to_owned()
            }
            _ => "Failed to create account.".to_owned(),
        },
        _ => "Failed to create account.".to_owned(),
    }
}
