use services::{CategoryScore, FinishReason, ResultsSnapshot, ReviewItem};

use crate::vm::time_fmt::format_elapsed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRowVm {
    pub label: &'static str,
    pub score_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRowVm {
    pub sentence: String,
    pub answer_label: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub percentage_label: String,
    pub tier_title: &'static str,
    pub tier_feedback: &'static str,
    pub elapsed_label: Option<String>,
    /// Shown when the quiz did not run to the last question.
    pub reason_note: Option<String>,
    pub categories: Vec<CategoryRowVm>,
    pub review: Vec<ReviewRowVm>,
}

#[must_use]
pub fn map_results(snapshot: &ResultsSnapshot) -> ResultsVm {
    let reason_note = match snapshot.reason {
        FinishReason::Completed => None,
        FinishReason::TimeExpired => Some(format!(
            "Time's up! {} unanswered.",
            question_count(snapshot.unanswered)
        )),
        FinishReason::EndedEarly => Some(format!(
            "Quiz ended early. {} unanswered.",
            question_count(snapshot.unanswered)
        )),
    };

    ResultsVm {
        score_label: format!("{} / {}", snapshot.score, snapshot.total),
        percentage_label: format!("{}%", snapshot.percentage),
        tier_title: snapshot.tier.title(),
        tier_feedback: snapshot.tier.feedback(),
        elapsed_label: snapshot.elapsed.map(format_elapsed),
        reason_note,
        categories: snapshot.categories.iter().map(category_row).collect(),
        review: snapshot.review.iter().map(review_row).collect(),
    }
}

fn category_row(score: &CategoryScore) -> CategoryRowVm {
    CategoryRowVm {
        label: score.category.label(),
        score_label: format!("{} / {}", score.correct, score.total),
    }
}

fn review_row(item: &ReviewItem) -> ReviewRowVm {
    let answer_label = if item.is_correct {
        format!("You answered \"{}\"", item.selected_text)
    } else {
        format!(
            "You answered \"{}\"; correct: \"{}\"",
            item.selected_text, item.correct_text
        )
    };
    ReviewRowVm {
        sentence: item.sentence.clone(),
        answer_label,
        is_correct: item.is_correct,
    }
}

fn question_count(count: usize) -> String {
    if count == 1 {
        "1 question".to_owned()
    } else {
        format!("{count} questions")
    }
}
