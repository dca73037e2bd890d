use chrono::Duration;

use quiz_core::model::{
    Category, Explanation, OptionId, Question, QuestionFilters, QuestionId, Tier, TimerDuration,
};

use super::progress::QuizProgress;
use super::service::{FinishReason, QuizPhase, QuizSession};

//
// ─── SNAPSHOTS ─────────────────────────────────────────────────────────────────
//

/// Everything a screen needs to render one phase of the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizSnapshot {
    Home(HomeSnapshot),
    Question(QuestionSnapshot),
    Results(ResultsSnapshot),
    Empty(EmptySnapshot),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeSnapshot {
    pub filters: QuestionFilters,
    pub timer: TimerDuration,
    /// Questions in the working set that pass the filters.
    pub available: usize,
    pub working_set: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSnapshot {
    pub question: Question,
    pub progress: QuizProgress,
    pub selected: Option<OptionId>,
    /// Present once the current answer is submitted.
    pub feedback: Option<AnswerFeedback>,
    pub remaining_secs: Option<u32>,
    pub is_last: bool,
}

/// Grading shown right after submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub selected_text: String,
    pub correct_option_id: OptionId,
    pub correct_text: String,
    pub explanation: Explanation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsSnapshot {
    pub score: usize,
    pub total: usize,
    pub answered: usize,
    /// Filtered questions never submitted (timer expiry or ending early).
    pub unanswered: usize,
    pub percentage: u8,
    pub tier: Tier,
    pub elapsed: Option<Duration>,
    pub reason: FinishReason,
    pub categories: Vec<CategoryScore>,
    pub review: Vec<ReviewItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScore {
    pub category: Category,
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

/// One submitted answer, for the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub question_id: QuestionId,
    pub sentence: String,
    pub selected_text: String,
    pub correct_text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptySnapshot {
    pub filters: QuestionFilters,
    pub started: bool,
}

//
// ─── BUILDERS ──────────────────────────────────────────────────────────────────
//

impl QuizSession {
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        match self.phase() {
            QuizPhase::Home => QuizSnapshot::Home(HomeSnapshot {
                filters: self.filters(),
                timer: self.timer(),
                available: self.total(),
                working_set: self.working_set().len(),
            }),
            QuizPhase::Empty => QuizSnapshot::Empty(EmptySnapshot {
                filters: self.filters(),
                started: self.is_started(),
            }),
            QuizPhase::InProgress => self
                .question_snapshot()
                .map_or_else(|| self.empty_snapshot(), QuizSnapshot::Question),
            QuizPhase::Finished => QuizSnapshot::Results(self.results_snapshot()),
        }
    }

    fn empty_snapshot(&self) -> QuizSnapshot {
        QuizSnapshot::Empty(EmptySnapshot {
            filters: self.filters(),
            started: self.is_started(),
        })
    }

    fn question_snapshot(&self) -> Option<QuestionSnapshot> {
        let question = self.current_question()?;
        let feedback = if self.is_submitted() {
            self.answers()
                .last()
                .map(|answer| feedback_for(question, answer.selected_option_id()))
        } else {
            None
        };

        Some(QuestionSnapshot {
            question: question.clone(),
            progress: self.progress(),
            selected: self.selected_option().cloned(),
            feedback,
            remaining_secs: self.remaining_secs(),
            is_last: self.current_index() + 1 >= self.total(),
        })
    }

    /// Aggregates for the results screen; also usable mid-quiz.
    #[must_use]
    pub fn results_snapshot(&self) -> ResultsSnapshot {
        let answered = self.answers().len();
        ResultsSnapshot {
            score: self.score(),
            total: self.total(),
            answered,
            unanswered: self.total().saturating_sub(answered),
            percentage: self.percentage(),
            tier: self.tier(),
            elapsed: self.elapsed(),
            reason: self.finish_reason().unwrap_or(FinishReason::Completed),
            categories: self.category_scores(),
            review: self.review_items(),
        }
    }

    /// Per-category tallies, in `Category::ALL` order, skipping absent categories.
    #[must_use]
    pub fn category_scores(&self) -> Vec<CategoryScore> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let mut score = CategoryScore {
                    category,
                    correct: 0,
                    answered: 0,
                    total: 0,
                };
                for question in self.filtered_questions().filter(|q| q.category() == category) {
                    score.total += 1;
                    if let Some(answer) = self
                        .answers()
                        .iter()
                        .find(|answer| answer.question_id() == question.id())
                    {
                        score.answered += 1;
                        if answer.is_correct() {
                            score.correct += 1;
                        }
                    }
                }
                (score.total > 0).then_some(score)
            })
            .collect()
    }

    fn review_items(&self) -> Vec<ReviewItem> {
        self.answers()
            .iter()
            .filter_map(|answer| {
                let question = self
                    .working_set()
                    .iter()
                    .find(|q| q.id() == answer.question_id())?;
                Some(ReviewItem {
                    question_id: question.id(),
                    sentence: question.sentence().to_owned(),
                    selected_text: option_text(question, answer.selected_option_id()),
                    correct_text: question.correct_option().text().to_owned(),
                    is_correct: answer.is_correct(),
                })
            })
            .collect()
    }
}

fn feedback_for(question: &Question, selected: &OptionId) -> AnswerFeedback {
    let correct = question.correct_option();
    AnswerFeedback {
        is_correct: question.is_correct(selected),
        selected_text: option_text(question, selected),
        correct_option_id: correct.id().clone(),
        correct_text: correct.text().to_owned(),
        explanation: question.explanation().clone(),
    }
}

fn option_text(question: &Question, id: &OptionId) -> String {
    question
        .option(id)
        .map_or_else(|| id.to_string(), |option| option.text().to_owned())
}
