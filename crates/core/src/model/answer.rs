use crate::model::ids::{OptionId, QuestionId};
use crate::model::question::Question;

/// A locked-in answer to one question.
///
/// Correctness is decided once, when the answer is graded, and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAnswer {
    question_id: QuestionId,
    selected_option_id: OptionId,
    is_correct: bool,
}

impl UserAnswer {
    #[must_use]
    pub fn grade(question: &Question, selected_option_id: OptionId) -> Self {
        Self {
            question_id: question.id(),
            is_correct: question.is_correct(&selected_option_id),
            selected_option_id,
        }
    }

    #[must_use]
    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    #[must_use]
    pub fn selected_option_id(&self) -> &OptionId {
        &self.selected_option_id
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}
