//! Small deterministic banks for tests.
//!
//! Only built for this crate's tests or with the `test-support` feature.

use quiz_core::model::{
    AnswerOption, Category, Difficulty, Explanation, OptionId, Question, QuestionDraft, QuestionId,
};

use crate::bank::QuestionBank;

/// A question whose correct option is always `"a"`.
///
/// Option texts are `"right {id}"`, `"wrong {id}"` and `"other {id}"`.
///
/// # Panics
///
/// Never for the fixed shape built here; validation would only fail on a malformed draft.
#[must_use]
pub fn question(id: u32, difficulty: Difficulty, category: Category) -> Question {
    let explanation = Explanation::new(
        format!("Rule for question {id}."),
        format!("Example for question {id}."),
        format!("Mistake for question {id}."),
        None,
    )
    .expect("fixture explanation is valid");

    QuestionDraft {
        id: QuestionId::new(id),
        sentence: format!("Sentence {id} has a ___ here."),
        options: vec![
            AnswerOption::new("a", format!("right {id}")),
            AnswerOption::new("b", format!("wrong {id}")),
            AnswerOption::new("c", format!("other {id}")),
        ],
        correct_option_id: OptionId::from("a"),
        difficulty,
        category,
        explanation,
    }
    .validate()
    .expect("fixture question is valid")
}

/// `count` questions with ids `1..=count`, cycling through difficulties and categories.
///
/// # Panics
///
/// Panics if `count` is zero.
#[must_use]
pub fn numbered_bank(count: u32) -> QuestionBank {
    let questions = (1..=count)
        .map(|id| {
            let idx = id as usize;
            question(
                id,
                Difficulty::ALL[idx % Difficulty::ALL.len()],
                Category::ALL[idx % Category::ALL.len()],
            )
        })
        .collect();
    QuestionBank::from_questions(questions).expect("fixture bank is non-empty")
}
