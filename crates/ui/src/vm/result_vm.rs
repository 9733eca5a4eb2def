use eduquiz_core::model::{QuestionResult, QuizResult};

/// One graded question, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionRowVm {
    pub number: usize,
    pub question: String,
    pub user_answer: String,
    /// Shown only when the answer was wrong.
    pub correction: Option<String>,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultSummaryVm {
    pub score: u32,
    pub total: u32,
    pub percentage_str: String,
    pub passed: bool,
    pub rows: Vec<QuestionRowVm>,
}

impl ResultSummaryVm {
    #[must_use]
    pub fn verdict(&self) -> &'static str {
        if self.passed {
            "Great job! You passed the quiz."
        } else {
            "Keep studying! You'll do better next time."
        }
    }
}

/// Convert a graded quiz into the results-page view model.
#[must_use]
pub fn map_result(result: &QuizResult) -> ResultSummaryVm {
    let rows = result
        .question_results
        .iter()
        .enumerate()
        .map(|(index, question)| map_question(index + 1, question))
        .collect();
    ResultSummaryVm {
        score: result.score,
        total: result.total_questions,
        percentage_str: format!("{:.0}%", result.percentage),
        passed: result.passed(),
        rows,
    }
}

fn map_question(number: usize, question: &QuestionResult) -> QuestionRowVm {
    let user_answer = match question.submitted_answer() {
        Some(answer) => answer.to_owned(),
        None => "Not answered".to_owned(),
    };
    let correction = (!question.is_correct).then(|| question.correct_answer.clone());
    QuestionRowVm {
        number,
        question: question.question.clone(),
        user_answer,
        correction,
        is_correct: question.is_correct,
    }
}
