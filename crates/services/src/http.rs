//! reqwest-backed implementation of [`EduApi`].

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};

use eduquiz_core::model::{
    Classroom, ClassroomId, FormId, NewClassroom, QuestionResult, Quiz, QuizId, QuizResult,
    StudentClassroom, Teacher,
};

use crate::api::{CreatedClassroom, EduApi};
use crate::error::ApiError;

/// HTTP client for the education API at a fixed origin.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base: Url,
}

impl HttpApi {
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self {
            client: Client::new(),
            base,
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Classify a non-success response by status, extracting the server's
/// `{"error": ...}` message where one exists.
async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = error_body_message(response).await;
    tracing::warn!(%status, %message, "api call failed");
    Err(match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::CONFLICT => ApiError::Conflict(message),
        StatusCode::BAD_REQUEST => ApiError::BadRequest(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        _ => ApiError::Server(message),
    })
}

async fn error_body_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            error: Some(message),
        }) => message,
        _ => format!("request failed with status {status}"),
    }
}

fn none_if_empty(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// The backend emits `datetime.isoformat()` without an offset for older
/// records and an empty string when the field was never set.
fn parse_created_date(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignupRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    qualification: &'a str,
}

#[derive(Debug, Serialize)]
struct EvaluateRequest<'a> {
    form_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TeacherEnvelope {
    teacher: Option<Teacher>,
}

#[derive(Debug, Deserialize)]
struct ClassroomWire {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    teacher: String,
    #[serde(default)]
    students: Vec<String>,
    #[serde(default)]
    quizzes: Vec<String>,
    #[serde(rename = "createdDate", default)]
    created_date: String,
    #[serde(default)]
    status: String,
}

impl From<ClassroomWire> for Classroom {
    fn from(wire: ClassroomWire) -> Self {
        Classroom {
            id: ClassroomId::new(wire.id),
            name: wire.name,
            subject: wire.subject,
            description: wire.description,
            teacher: wire.teacher,
            students: wire.students,
            quizzes: wire.quizzes.into_iter().map(QuizId::new).collect(),
            created_date: parse_created_date(&wire.created_date),
            status: wire.status,
        }
    }
}

#[derive(Debug, Deserialize)]
struct QuizWire {
    #[serde(rename = "_id", default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(rename = "googleFormLink", default)]
    google_form_link: String,
}

impl From<QuizWire> for Quiz {
    fn from(wire: QuizWire) -> Self {
        Quiz {
            id: QuizId::new(wire.id),
            title: wire.title,
            google_form_link: none_if_empty(wire.google_form_link),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StudentClassroomWire {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    quizzes: Vec<QuizWire>,
}

impl From<StudentClassroomWire> for StudentClassroom {
    fn from(wire: StudentClassroomWire) -> Self {
        StudentClassroom {
            id: ClassroomId::new(wire.id),
            name: wire.name,
            subject: wire.subject,
            quizzes: wire.quizzes.into_iter().map(Quiz::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreateClassroomWire {
    classroom_id: String,
    quiz_id: String,
    #[serde(default)]
    google_form_link: String,
}

#[derive(Debug, Deserialize)]
struct QuizDetailWire {
    #[serde(default)]
    quiz_id: String,
    #[serde(default)]
    title: String,
    #[serde(rename = "googleFormLink", default)]
    google_form_link: String,
}

#[derive(Debug, Deserialize)]
struct FormIdWire {
    form_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EvaluationWire {
    score: u32,
    total_questions: u32,
    percentage: f64,
    question_results: Option<Vec<QuestionResult>>,
}

#[async_trait]
impl EduApi for HttpApi {
    async fn teacher_login(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Teacher, ApiError> {
        tracing::debug!(email, "teacher login");
        let response = self
            .client
            .post(self.endpoint(&["api", "teachers", "login"]))
            .json(&LoginRequest {
                name,
                email,
                password,
            })
            .send()
            .await?;
        let body: TeacherEnvelope = check(response).await?.json().await?;
        body.teacher.ok_or_else(|| {
            ApiError::InvalidResponse("login response is missing the teacher record".into())
        })
    }

    async fn teacher_signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        qualification: &str,
    ) -> Result<Teacher, ApiError> {
        tracing::debug!(email, "teacher signup");
        let response = self
            .client
            .post(self.endpoint(&["api", "teachers", "signup"]))
            .json(&SignupRequest {
                name,
                email,
                password,
                qualification,
            })
            .send()
            .await?;
        let body: TeacherEnvelope = check(response).await?.json().await?;
        body.teacher.ok_or_else(|| {
            ApiError::InvalidResponse("signup response is missing the teacher record".into())
        })
    }

    async fn classrooms_for_teacher(&self, teacher: &str) -> Result<Vec<Classroom>, ApiError> {
        tracing::debug!(teacher, "fetching classrooms");
        let response = self
            .client
            .get(self.endpoint(&["api", "classrooms", teacher]))
            .send()
            .await?;
        let body: Vec<ClassroomWire> = check(response).await?.json().await?;
        Ok(body.into_iter().map(Classroom::from).collect())
    }

    async fn create_classroom(
        &self,
        teacher: &str,
        request: &NewClassroom,
    ) -> Result<CreatedClassroom, ApiError> {
        tracing::debug!(teacher, name = %request.name, "creating classroom");
        let document = &request.document;
        let part = Part::bytes(document.bytes.clone())
            .file_name(document.file_name.clone())
            .mime_str(&document.mime_type)?;
        let form = Form::new()
            .text("name", request.name.clone())
            .text("subject", request.subject.clone())
            .text("description", request.description.clone())
            .part("document", part)
            .text("studentEmails", request.student_emails.join("\n"))
            .text("teacher", teacher.to_owned())
            .text("difficulty", request.difficulty.as_str())
            .text("numQuestions", request.num_questions.to_string());

        let response = self
            .client
            .post(self.endpoint(&["api", "classrooms"]))
            .multipart(form)
            .send()
            .await?;
        let body: CreateClassroomWire = check(response).await?.json().await?;
        Ok(CreatedClassroom {
            classroom_id: ClassroomId::new(body.classroom_id),
            quiz_id: QuizId::new(body.quiz_id),
            google_form_link: none_if_empty(body.google_form_link),
        })
    }

    async fn student_classrooms(&self, email: &str) -> Result<Vec<StudentClassroom>, ApiError> {
        tracing::debug!(email, "student classroom lookup");
        let response = self
            .client
            .post(self.endpoint(&["api", "student", "login"]))
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await?;
        let body: Vec<StudentClassroomWire> = check(response).await?.json().await?;
        Ok(body.into_iter().map(StudentClassroom::from).collect())
    }

    async fn quiz(&self, id: &QuizId) -> Result<Quiz, ApiError> {
        tracing::debug!(quiz_id = %id, "fetching quiz");
        let response = self
            .client
            .get(self.endpoint(&["api", "get-quiz", id.as_str()]))
            .send()
            .await?;
        let body: QuizDetailWire = check(response).await?.json().await?;
        let quiz_id = if body.quiz_id.is_empty() {
            id.clone()
        } else {
            QuizId::new(body.quiz_id)
        };
        Ok(Quiz {
            id: quiz_id,
            title: body.title,
            google_form_link: none_if_empty(body.google_form_link),
        })
    }

    async fn latest_form_id(&self) -> Result<FormId, ApiError> {
        tracing::debug!("fetching latest form id");
        let response = self
            .client
            .get(self.endpoint(&["latest-form-id"]))
            .send()
            .await?;
        let body: FormIdWire = check(response).await?.json().await?;
        body.form_id
            .and_then(none_if_empty)
            .map(FormId::new)
            .ok_or_else(|| ApiError::InvalidResponse("response carries no form id".into()))
    }

    async fn evaluate_quiz(&self, form_id: &FormId) -> Result<QuizResult, ApiError> {
        tracing::debug!(form_id = %form_id, "evaluating quiz");
        let response = self
            .client
            .post(self.endpoint(&["evaluate-quiz"]))
            .json(&EvaluateRequest {
                form_id: form_id.as_str(),
            })
            .send()
            .await?;
        let body: EvaluationWire = check(response).await?.json().await?;
        let question_results = body.question_results.ok_or_else(|| {
            ApiError::InvalidResponse("evaluation is missing question_results".into())
        })?;
        Ok(QuizResult {
            score: body.score,
            total_questions: body.total_questions,
            percentage: body.percentage,
            question_results,
        })
    }
}
