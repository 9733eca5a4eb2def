use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::{AppContext, AuthState};
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let mut auth = use_context_provider(|| Signal::new(AuthState::Anonymous));

    // Restore the stored session before the router mounts, so the
    // dashboard guard never sees a stale Anonymous.
    let restored = use_resource(move || {
        let auth_service = ctx.auth();
        async move {
            if let Ok(Some(session)) = auth_service.restore().await {
                auth.set(AuthState::Authenticated(session));
            }
            true
        }
    });
    let ready = restored.value().read().is_some();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-route headings are rendered by each view.
        document::Title { "EduQuiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                if ready {
                    Router::<Route> {}
                } else {
                    p { class: "boot", "Loading..." }
                }
            }
        }
    }
}
