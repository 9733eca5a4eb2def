use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn LandingView() -> Element {
    rsx! {
        div { class: "page landing",
            h1 { "EduQuiz" }
            p { class: "tagline",
                "Upload a lesson, get a quiz. Proctored attempts, instant results."
            }
            div { class: "role-picker",
                Link { class: "role-card", to: Route::TeacherAuth {},
                    h2 { "I'm a Teacher" }
                    p { "Create classrooms and generate quizzes from your documents." }
                }
                Link { class: "role-card", to: Route::StudentDashboard {},
                    h2 { "I'm a Student" }
                    p { "Find your classrooms and take your quizzes." }
                }
            }
        }
    }
}
