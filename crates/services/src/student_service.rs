use std::sync::Arc;

use eduquiz_core::model::{Quiz, QuizId, StudentClassroom};

use crate::api::EduApi;
use crate::error::ApiError;

/// Student-facing lookups. No credential is involved anywhere here;
/// the email is purely a roster key.
#[derive(Clone)]
pub struct StudentService {
    api: Arc<dyn EduApi>,
}

impl StudentService {
    #[must_use]
    pub fn new(api: Arc<dyn EduApi>) -> Self {
        Self { api }
    }

    /// Classrooms whose roster contains the given email.
    ///
    /// # Errors
    ///
    /// `NotFound` when the email belongs to no classroom.
    pub async fn lookup(&self, email: &str) -> Result<Vec<StudentClassroom>, ApiError> {
        self.api.student_classrooms(email).await
    }

    /// A single quiz, resolved right before the student is handed off to
    /// the hosted form.
    ///
    /// # Errors
    ///
    /// `NotFound` when the quiz does not exist.
    pub async fn quiz(&self, id: &QuizId) -> Result<Quiz, ApiError> {
        self.api.quiz(id).await
    }
}
