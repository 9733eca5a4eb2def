//! The contract with the remote education API.
//!
//! Everything of substance (credential checks, quiz generation from the
//! uploaded document, grading, proctoring analysis) happens behind these
//! endpoints; the client only shapes requests and classifies failures.

use async_trait::async_trait;

use eduquiz_core::model::{
    Classroom, ClassroomId, FormId, NewClassroom, Quiz, QuizId, QuizResult, StudentClassroom,
    Teacher,
};

use crate::error::ApiError;

/// The server's acknowledgment of a classroom creation.
///
/// The backend answers with ids rather than a full record; callers
/// assemble the displayable classroom from this plus the submitted
/// draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedClassroom {
    pub classroom_id: ClassroomId,
    pub quiz_id: QuizId,
    pub google_form_link: Option<String>,
}

/// Remote API surface consumed by the portal.
#[async_trait]
pub trait EduApi: Send + Sync {
    /// `POST /api/teachers/login`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for a rejected credential, `InvalidResponse` when
    /// the success body lacks a teacher record.
    async fn teacher_login(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Teacher, ApiError>;

    /// `POST /api/teachers/signup`.
    ///
    /// # Errors
    ///
    /// `Conflict` when the email is already registered.
    async fn teacher_signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        qualification: &str,
    ) -> Result<Teacher, ApiError>;

    /// `GET /api/classrooms/{teacherName}`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` invalidates the session; other variants per status.
    async fn classrooms_for_teacher(&self, teacher: &str) -> Result<Vec<Classroom>, ApiError>;

    /// `POST /api/classrooms` as a multipart form, including the lesson
    /// document the server generates the quiz from.
    ///
    /// # Errors
    ///
    /// `Unauthorized` invalidates the session; other variants per status.
    async fn create_classroom(
        &self,
        teacher: &str,
        request: &NewClassroom,
    ) -> Result<CreatedClassroom, ApiError>;

    /// `POST /api/student/login` — a lookup keyed by email, not an
    /// authentication.
    ///
    /// # Errors
    ///
    /// `NotFound` when the email belongs to no classroom.
    async fn student_classrooms(&self, email: &str) -> Result<Vec<StudentClassroom>, ApiError>;

    /// `GET /api/get-quiz/{quizId}`, used by the final proctoring step to
    /// resolve the externally hosted form link.
    ///
    /// # Errors
    ///
    /// `NotFound` when the quiz does not exist.
    async fn quiz(&self, id: &QuizId) -> Result<Quiz, ApiError>;

    /// `GET /latest-form-id`.
    ///
    /// # Errors
    ///
    /// `NotFound` when no form has been submitted yet; `InvalidResponse`
    /// when the body carries no id.
    async fn latest_form_id(&self) -> Result<FormId, ApiError>;

    /// `POST /evaluate-quiz`.
    ///
    /// # Errors
    ///
    /// `InvalidResponse` when the evaluation lacks `question_results`.
    async fn evaluate_quiz(&self, form_id: &FormId) -> Result<QuizResult, ApiError>;
}
