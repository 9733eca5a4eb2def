mod landing;
mod proctor;
mod result;
mod state;
mod student_dashboard;
mod teacher_auth;
mod teacher_dashboard;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use landing::LandingView;
pub use proctor::{FaceCheckView, QuizFormView, UploadFaceView, WebcamCheckView};
pub use result::ResultView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use student_dashboard::StudentDashboardView;
pub use teacher_auth::TeacherAuthView;
pub use teacher_dashboard::TeacherDashboardView;
