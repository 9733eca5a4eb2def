use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a session from a login response.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("login response is missing the teacher {0}")]
    MissingField(&'static str),
}

/// The teacher record as returned by the authentication endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub name: String,
    pub email: String,
    pub qualification: String,
}

/// The locally persisted record identifying the authenticated teacher.
///
/// Exactly one session is active at a time. It is created on successful
/// login, destroyed on logout or when an authenticated call comes back
/// unauthorized, and assumed valid indefinitely in between. Serialized
/// keys stay camelCase to match the persisted payload of earlier builds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    name: String,
    email: String,
    qualification: String,
    login_time: DateTime<Utc>,
}

impl Session {
    /// Build a session from a teacher record, stamping the login time.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::MissingField` if any of name, email, or
    /// qualification is empty after trimming.
    pub fn from_teacher(teacher: Teacher, login_time: DateTime<Utc>) -> Result<Self, SessionError> {
        let session = Self {
            name: teacher.name,
            email: teacher.email,
            qualification: teacher.qualification,
            login_time,
        };
        if !session.is_well_formed() {
            return Err(SessionError::MissingField(session.first_missing_field()));
        }
        Ok(session)
    }

    /// True when name, email, and qualification are all present.
    ///
    /// A deserialized payload failing this check must be treated as no
    /// session at all.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.qualification.trim().is_empty()
    }

    fn first_missing_field(&self) -> &'static str {
        if self.name.trim().is_empty() {
            "name"
        } else if self.email.trim().is_empty() {
            "email"
        } else {
            "qualification"
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn qualification(&self) -> &str {
        &self.qualification
    }

    #[must_use]
    pub fn login_time(&self) -> DateTime<Utc> {
        self.login_time
    }
}
