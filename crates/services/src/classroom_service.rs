use std::sync::Arc;

use eduquiz_core::Clock;
use eduquiz_core::model::{Classroom, NewClassroom};

use crate::api::EduApi;
use crate::error::ApiError;

/// Classroom listing and creation for the teacher dashboard.
#[derive(Clone)]
pub struct ClassroomService {
    clock: Clock,
    api: Arc<dyn EduApi>,
}

impl ClassroomService {
    #[must_use]
    pub fn new(clock: Clock, api: Arc<dyn EduApi>) -> Self {
        Self { clock, api }
    }

    /// All classrooms owned by the named teacher.
    ///
    /// # Errors
    ///
    /// Propagates the API failure; `Unauthorized` means the caller must
    /// tear the session down.
    pub async fn list_for(&self, teacher: &str) -> Result<Vec<Classroom>, ApiError> {
        self.api.classrooms_for_teacher(teacher).await
    }

    /// Create a classroom and return a record ready to append to the
    /// dashboard list.
    ///
    /// The server acknowledges with ids only, so the displayable record
    /// is assembled from those plus the submitted request.
    ///
    /// # Errors
    ///
    /// Propagates the API failure.
    pub async fn create(
        &self,
        teacher: &str,
        request: NewClassroom,
    ) -> Result<Classroom, ApiError> {
        let created = self.api.create_classroom(teacher, &request).await?;
        tracing::info!(
            classroom = %created.classroom_id,
            quiz = %created.quiz_id,
            "classroom created"
        );
        Ok(Classroom {
            id: created.classroom_id,
            name: request.name,
            subject: request.subject,
            description: request.description,
            teacher: teacher.to_owned(),
            students: request.student_emails,
            quizzes: vec![created.quiz_id],
            created_date: Some(self.clock.now()),
            status: "active".to_owned(),
        })
    }
}
