use std::sync::Arc;

use eduquiz_core::model::QuizResult;

use crate::api::EduApi;
use crate::error::ApiError;

/// Grading of the most recent quiz submission.
#[derive(Clone)]
pub struct ResultsService {
    api: Arc<dyn EduApi>,
}

impl ResultsService {
    #[must_use]
    pub fn new(api: Arc<dyn EduApi>) -> Self {
        Self { api }
    }

    /// Grade the latest submitted form.
    ///
    /// The form id must be known before evaluation can start, so the two
    /// calls are strictly sequential; a failed id fetch never triggers an
    /// evaluation.
    ///
    /// # Errors
    ///
    /// `NotFound` when nothing has been submitted yet; `InvalidResponse`
    /// when the evaluation body lacks per-question results.
    pub async fn latest_result(&self) -> Result<QuizResult, ApiError> {
        let form_id = self.api.latest_form_id().await?;
        tracing::debug!(form = %form_id, "evaluating latest submission");
        self.api.evaluate_quiz(&form_id).await
    }
}
