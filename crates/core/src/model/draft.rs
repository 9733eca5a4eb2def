use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Quiz difficulty requested at classroom creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The wire value expected by the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Human-facing label for select controls.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing a difficulty from its wire value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty level: {raw}")]
pub struct ParseDifficultyError {
    raw: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ParseDifficultyError {
                raw: other.to_string(),
            }),
        }
    }
}

/// MIME types the API accepts for lesson documents.
pub const SUPPORTED_DOCUMENT_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Bounds on the requested question count.
pub const MIN_QUESTIONS: u8 = 1;
pub const MAX_QUESTIONS: u8 = 20;

/// A lesson document picked for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    /// True when the MIME type is one the API will accept.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        SUPPORTED_DOCUMENT_TYPES
            .iter()
            .any(|mime| *mime == self.mime_type)
    }
}

/// Validation failures for the classroom-creation form.
///
/// All of these block submission before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DraftError {
    #[error("classroom name, lesson document, and student emails are required")]
    MissingRequired,
    #[error("document type is not supported")]
    UnsupportedDocument,
    #[error("difficulty is not one of easy, medium, hard")]
    InvalidDifficulty,
    #[error("question count must be an integer between {MIN_QUESTIONS} and {MAX_QUESTIONS}")]
    QuestionCountOutOfRange,
}

impl DraftError {
    /// The inline message shown next to the form.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            DraftError::MissingRequired => {
                "Please fill all required fields: Classroom Name, Lesson Document, and Student Emails."
            }
            DraftError::UnsupportedDocument => "Please upload a valid PDF, DOC, or DOCX file.",
            DraftError::InvalidDifficulty => "Please select a valid difficulty level.",
            DraftError::QuestionCountOutOfRange => {
                "Please enter a valid number of questions (1-20)."
            }
        }
    }
}

/// Raw classroom-creation form state, as typed.
///
/// Difficulty and question count stay strings here so invalid input is
/// caught by `validate` rather than silently coerced by the controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassroomDraft {
    pub name: String,
    pub subject: String,
    pub description: String,
    pub document: Option<DocumentFile>,
    pub student_emails: String,
    pub difficulty: String,
    pub num_questions: String,
}

/// A validated creation request, ready to post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewClassroom {
    pub name: String,
    pub subject: String,
    pub description: String,
    pub document: DocumentFile,
    pub student_emails: Vec<String>,
    pub difficulty: Difficulty,
    pub num_questions: u8,
}

impl ClassroomDraft {
    /// Check every input constraint and produce a postable request.
    ///
    /// # Errors
    ///
    /// Returns the first `DraftError` encountered, in the order the form
    /// presents the fields: required presence, document type, difficulty,
    /// question count.
    pub fn validate(&self) -> Result<NewClassroom, DraftError> {
        let student_emails: Vec<String> = self
            .student_emails
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();

        let document = match (&self.name, &self.document, student_emails.is_empty()) {
            (name, Some(document), false) if !name.trim().is_empty() => document.clone(),
            _ => return Err(DraftError::MissingRequired),
        };

        if !document.is_supported() {
            return Err(DraftError::UnsupportedDocument);
        }

        let difficulty = self
            .difficulty
            .parse::<Difficulty>()
            .map_err(|_| DraftError::InvalidDifficulty)?;

        let num_questions = self
            .num_questions
            .trim()
            .parse::<u8>()
            .map_err(|_| DraftError::QuestionCountOutOfRange)?;
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&num_questions) {
            return Err(DraftError::QuestionCountOutOfRange);
        }

        Ok(NewClassroom {
            name: self.name.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            description: self.description.trim().to_owned(),
            document,
            student_emails,
            difficulty,
            num_questions,
        })
    }
}
