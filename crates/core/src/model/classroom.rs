use chrono::{DateTime, Utc};
use url::Url;

use super::ids::{ClassroomId, QuizId};

/// A teacher-owned classroom as fetched from the API.
///
/// Classrooms are externally owned: this is a read-only view, never
/// mutated locally except by appending a newly created record to an
/// in-memory list.
#[derive(Clone, Debug, PartialEq)]
pub struct Classroom {
    pub id: ClassroomId,
    pub name: String,
    pub subject: String,
    pub description: String,
    pub teacher: String,
    pub students: Vec<String>,
    pub quizzes: Vec<QuizId>,
    pub created_date: Option<DateTime<Utc>>,
    pub status: String,
}

/// A classroom as seen by a student lookup, with its quizzes embedded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentClassroom {
    pub id: ClassroomId,
    pub name: String,
    pub subject: String,
    pub quizzes: Vec<Quiz>,
}

/// A quiz reference. The form link decides whether the proctored launch
/// button renders at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub google_form_link: Option<String>,
}

impl Quiz {
    /// The externally hosted form URL, when present and parseable.
    #[must_use]
    pub fn launch_url(&self) -> Option<Url> {
        let raw = self.google_form_link.as_deref()?;
        let url = Url::parse(raw).ok()?;
        matches!(url.scheme(), "http" | "https").then_some(url)
    }

    /// True when the quiz can be launched through the proctoring flow.
    #[must_use]
    pub fn is_launchable(&self) -> bool {
        self.launch_url().is_some()
    }
}
