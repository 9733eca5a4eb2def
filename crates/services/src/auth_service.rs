use std::sync::Arc;

use eduquiz_core::Clock;
use eduquiz_core::auth::{LoginForm, SignupForm};
use eduquiz_core::model::{Session, Teacher};
use storage::session_store::SessionStore;

use crate::api::EduApi;
use crate::error::AuthServiceError;

/// Orchestrates teacher authentication and session persistence.
///
/// The session store is the only client state that outlives a page; this
/// service is its sole writer.
#[derive(Clone)]
pub struct AuthService {
    clock: Clock,
    api: Arc<dyn EduApi>,
    store: Arc<dyn SessionStore>,
}

impl AuthService {
    #[must_use]
    pub fn new(clock: Clock, api: Arc<dyn EduApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { clock, api, store }
    }

    /// Log a teacher in, stamp the login time, and persist the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::Api` for rejected or failed calls,
    /// `AuthServiceError::Session` when the response's teacher record is
    /// not well-formed, and `AuthServiceError::Storage` if persisting
    /// fails. On any error no session is stored.
    pub async fn login(&self, form: &LoginForm) -> Result<Session, AuthServiceError> {
        let teacher = self
            .api
            .teacher_login(&form.name, &form.email, &form.password)
            .await?;
        let session = Session::from_teacher(teacher, self.clock.now())?;
        self.store.save(&session).await?;
        Ok(session)
    }

    /// Register a teacher account. Deliberately does not authenticate:
    /// the caller switches the form back to login mode on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::Api`; a `Conflict` means the email is
    /// already registered.
    pub async fn signup(&self, form: &SignupForm) -> Result<Teacher, AuthServiceError> {
        let teacher = self
            .api
            .teacher_signup(
                &form.name,
                &form.email,
                &form.password,
                &form.qualification,
            )
            .await?;
        Ok(teacher)
    }

    /// The previously stored session, if a well-formed one exists.
    /// Malformed payloads have already been cleared by the store.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::Storage` for storage-level failures.
    pub async fn restore(&self) -> Result<Option<Session>, AuthServiceError> {
        let session = self.store.load().await?;
        Ok(session)
    }

    /// Explicit logout.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::Storage` if the store cannot be
    /// cleared.
    pub async fn logout(&self) -> Result<(), AuthServiceError> {
        self.store.clear().await?;
        Ok(())
    }

    /// Session teardown after an unauthorized response from any
    /// authenticated call.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::Storage` if the store cannot be
    /// cleared.
    pub async fn invalidate(&self) -> Result<(), AuthServiceError> {
        self.store.clear().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use eduquiz_core::model::{
        Classroom, FormId, NewClassroom, Quiz, QuizId, QuizResult, StudentClassroom,
    };
    use eduquiz_core::time::fixed_now;
    use storage::session_store::InMemorySessionStore;

    use crate::api::CreatedClassroom;
    use crate::error::ApiError;

    struct FakeApi {
        login_result: Result<Teacher, ApiError>,
    }

    #[async_trait]
    impl EduApi for FakeApi {
        async fn teacher_login(
            &self,
            _name: &str,
            _email: &str,
            _password: &str,
        ) -> Result<Teacher, ApiError> {
            self.login_result.clone()
        }

        async fn teacher_signup(
            &self,
            name: &str,
            email: &str,
            _password: &str,
            qualification: &str,
        ) -> Result<Teacher, ApiError> {
            Ok(Teacher {
                name: name.into(),
                email: email.into(),
                qualification: qualification.into(),
            })
        }

        async fn classrooms_for_teacher(&self, _: &str) -> Result<Vec<Classroom>, ApiError> {
            Ok(Vec::new())
        }

        async fn create_classroom(
            &self,
            _: &str,
            _: &NewClassroom,
        ) -> Result<CreatedClassroom, ApiError> {
            Err(ApiError::Unreachable)
        }

        async fn student_classrooms(&self, _: &str) -> Result<Vec<StudentClassroom>, ApiError> {
            Ok(Vec::new())
        }

        async fn quiz(&self, _: &QuizId) -> Result<Quiz, ApiError> {
            Err(ApiError::Unreachable)
        }

        async fn latest_form_id(&self) -> Result<FormId, ApiError> {
            Err(ApiError::Unreachable)
        }

        async fn evaluate_quiz(&self, _: &FormId) -> Result<QuizResult, ApiError> {
            Err(ApiError::Unreachable)
        }
    }

    fn login_form() -> LoginForm {
        LoginForm {
            name: "A".into(),
            email: "a@x.com".into(),
            password: "secret1".into(),
        }
    }

    fn service(login_result: Result<Teacher, ApiError>) -> (AuthService, InMemorySessionStore) {
        let store = InMemorySessionStore::new();
        let service = AuthService::new(
            Clock::fixed(fixed_now()),
            Arc::new(FakeApi { login_result }),
            Arc::new(store.clone()),
        );
        (service, store)
    }

    #[tokio::test]
    async fn login_persists_session_with_timestamp() {
        let (service, store) = service(Ok(Teacher {
            name: "A".into(),
            email: "a@x.com".into(),
            qualification: "MSc".into(),
        }));

        let session = service.login(&login_form()).await.unwrap();
        assert_eq!(session.name(), "A");
        assert_eq!(session.email(), "a@x.com");
        assert_eq!(session.qualification(), "MSc");
        assert_eq!(session.login_time(), fixed_now());

        let stored = store.load().await.unwrap().unwrap();
        assert_eq!(stored, session);
    }

    #[tokio::test]
    async fn login_with_blank_teacher_record_stores_nothing() {
        let (service, store) = service(Ok(Teacher {
            name: "A".into(),
            email: "a@x.com".into(),
            qualification: String::new(),
        }));

        let err = service.login(&login_form()).await.unwrap_err();
        assert!(matches!(err, AuthServiceError::Session(_)));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rejected_login_stores_nothing() {
        let (service, store) = service(Err(ApiError::Unauthorized));

        let err = service.login(&login_form()).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn signup_does_not_authenticate() {
        let (service, store) = service(Err(ApiError::Unreachable));
        let form = SignupForm {
            name: "B".into(),
            email: "b@x.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            qualification: "B.Ed".into(),
        };

        let teacher = service.signup(&form).await.unwrap();
        assert_eq!(teacher.email, "b@x.com");
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn logout_clears_stored_session() {
        let (service, store) = service(Ok(Teacher {
            name: "A".into(),
            email: "a@x.com".into(),
            qualification: "MSc".into(),
        }));
        service.login(&login_form()).await.unwrap();

        service.logout().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        assert!(service.restore().await.unwrap().is_none());
    }
}
