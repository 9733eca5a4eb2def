use dioxus::prelude::*;
use services::ApiError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The session is no longer accepted; the guard tears it down.
    Unauthorized,
    /// Everything else, already worded for display.
    Message(String),
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ViewError::Unauthorized => "Session expired. Please log in again.",
            ViewError::Message(text) => text,
        }
    }
}

impl From<ApiError> for ViewError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => ViewError::Unauthorized,
            ApiError::Unreachable => ViewError::Message(
                "Unable to reach the server. Please check if the backend is running.".to_owned(),
            ),
            ApiError::Conflict(text) | ApiError::BadRequest(text) | ApiError::NotFound(text) => {
                ViewError::Message(text)
            }
            _ => ViewError::Message("Server error. Please try again later.".to_owned()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Message(
                "Something went wrong. Please try again.".to_owned(),
            )),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_has_fixed_copy() {
        let err = ViewError::from(ApiError::Unauthorized);
        assert_eq!(err, ViewError::Unauthorized);
        assert_eq!(err.message(), "Session expired. Please log in again.");
    }

    #[test]
    fn server_messages_pass_through() {
        let err = ViewError::from(ApiError::NotFound("No classrooms found".into()));
        assert_eq!(err.message(), "No classrooms found");
    }

    #[test]
    fn unreachable_names_the_backend() {
        let err = ViewError::from(ApiError::Unreachable);
        assert_eq!(
            err.message(),
            "Unable to reach the server. Please check if the backend is running."
        );
    }
}
