use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{
    FaceCheckView, LandingView, QuizFormView, ResultView, StudentDashboardView, TeacherAuthView,
    TeacherDashboardView, UploadFaceView, WebcamCheckView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LandingView)] Landing {},
        #[route("/teacher/auth", TeacherAuthView)] TeacherAuth {},
        #[route("/teacher", TeacherDashboardView)] TeacherDashboard {},
        #[route("/student", StudentDashboardView)] StudentDashboard {},
        #[route("/uploadface/:quiz_id", UploadFaceView)] UploadFace { quiz_id: String },
        #[route("/face/:quiz_id", FaceCheckView)] FaceCheck { quiz_id: String },
        #[route("/web/:quiz_id", WebcamCheckView)] WebcamCheck { quiz_id: String },
        #[route("/googleform/:quiz_id", QuizFormView)] QuizForm { quiz_id: String },
        #[route("/result", ResultView)] Result {},
}

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    TeacherOnly,
}

/// Total classification of every route. Guarded views redirect to the
/// teacher auth page; the target is fixed, not return-aware.
#[must_use]
pub fn required_access(route: &Route) -> RouteAccess {
    match route {
        Route::TeacherDashboard {} => RouteAccess::TeacherOnly,
        Route::Landing {}
        | Route::TeacherAuth {}
        | Route::StudentDashboard {}
        | Route::UploadFace { .. }
        | Route::FaceCheck { .. }
        | Route::WebcamCheck { .. }
        | Route::QuizForm { .. }
        | Route::Result {} => RouteAccess::Public,
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "content",
            Outlet::<Route> {}
        }
    }
}
