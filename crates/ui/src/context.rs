use std::sync::Arc;

use eduquiz_core::model::Session;
use services::{AuthService, ClassroomService, ResultsService, StudentService};

/// Whether a teacher session is active.
///
/// Flips to `Authenticated` only on a login response whose teacher record
/// is well formed, and back to `Anonymous` on logout or any unauthorized
/// response from an authenticated call.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    Anonymous,
    Authenticated(Session),
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            AuthState::Anonymous => None,
        }
    }
}

pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn classrooms(&self) -> Arc<ClassroomService>;
    fn students(&self) -> Arc<StudentService>;
    fn results(&self) -> Arc<ResultsService>;
}

#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    classrooms: Arc<ClassroomService>,
    students: Arc<StudentService>,
    results: Arc<ResultsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth(),
            classrooms: app.classrooms(),
            students: app.students(),
            results: app.results(),
        }
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn classrooms(&self) -> Arc<ClassroomService> {
        Arc::clone(&self.classrooms)
    }

    #[must_use]
    pub fn students(&self) -> Arc<StudentService> {
        Arc::clone(&self.students)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultsService> {
        Arc::clone(&self.results)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
