use serde::Deserialize;

/// Per-question grading outcome from the evaluation endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct QuestionResult {
    pub question: String,
    #[serde(default)]
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

impl QuestionResult {
    /// The submitted answer, or `None` when the question was skipped.
    #[must_use]
    pub fn submitted_answer(&self) -> Option<&str> {
        let trimmed = self.user_answer.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// A graded quiz. Entirely derived from one evaluation call and never
/// persisted locally.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizResult {
    pub score: u32,
    pub total_questions: u32,
    pub percentage: f64,
    pub question_results: Vec<QuestionResult>,
}

impl QuizResult {
    /// Pass threshold used by the results page copy.
    pub const PASS_PERCENTAGE: f64 = 70.0;

    #[must_use]
    pub fn passed(&self) -> bool {
        self.percentage >= Self::PASS_PERCENTAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_at_threshold() {
        let result = QuizResult {
            score: 7,
            total_questions: 10,
            percentage: 70.0,
            question_results: Vec::new(),
        };
        assert!(result.passed());
    }

    #[test]
    fn fails_below_threshold() {
        let result = QuizResult {
            score: 3,
            total_questions: 5,
            percentage: 60.0,
            question_results: Vec::new(),
        };
        assert!(!result.passed());
    }

    #[test]
    fn blank_answer_counts_as_skipped() {
        let q = QuestionResult {
            question: "2+2?".into(),
            user_answer: "  ".into(),
            correct_answer: "4".into(),
            is_correct: false,
        };
        assert_eq!(q.submitted_answer(), None);
    }

    #[test]
    fn answer_is_trimmed() {
        let q = QuestionResult {
            question: "2+2?".into(),
            user_answer: " 4 ".into(),
            correct_answer: "4".into(),
            is_correct: true,
        };
        assert_eq!(q.submitted_answer(), Some("4"));
    }
}
