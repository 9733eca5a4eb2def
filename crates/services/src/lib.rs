#![forbid(unsafe_code)]

pub mod api;
pub mod auth_service;
pub mod classroom_service;
pub mod error;
pub mod http;
pub mod results_service;
pub mod student_service;

pub use eduquiz_core::Clock;

pub use api::{CreatedClassroom, EduApi};
pub use auth_service::AuthService;
pub use classroom_service::ClassroomService;
pub use error::{ApiError, AuthServiceError};
pub use http::HttpApi;
pub use results_service::ResultsService;
pub use student_service::StudentService;
