mod classroom;
mod draft;
mod ids;
mod quiz_result;
mod session;

pub use classroom::{Classroom, Quiz, StudentClassroom};
pub use draft::{
    ClassroomDraft, Difficulty, DocumentFile, DraftError, NewClassroom, ParseDifficultyError,
    MAX_QUESTIONS, MIN_QUESTIONS, SUPPORTED_DOCUMENT_TYPES,
};
pub use ids::{ClassroomId, FormId, QuizId};
pub use quiz_result::{QuestionResult, QuizResult};
pub use session::{Session, SessionError, Teacher};
