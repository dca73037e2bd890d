use quiz_core::model::OptionId;
use services::{AnswerFeedback, QuestionSnapshot};

use crate::vm::time_fmt::format_countdown;

/// How an option button should look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    /// After submit: the right answer.
    Correct,
    /// After submit: the learner's wrong pick.
    Incorrect,
    /// After submit: neither picked nor correct.
    Dimmed,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionState::Idle => "option",
            OptionState::Selected => "option option--selected",
            OptionState::Correct => "option option--correct",
            OptionState::Incorrect => "option option--incorrect",
            OptionState::Dimmed => "option option--dimmed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub id: OptionId,
    /// 1-based, matches the digit key.
    pub key_hint: usize,
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub headline: &'static str,
    pub correct_answer: String,
    pub rule: String,
    pub example: Option<String>,
    pub common_mistake: Option<String>,
    pub review_link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub before_blank: String,
    pub after_blank: String,
    /// Text shown inside the blank once an option is picked.
    pub blank_fill: Option<String>,
    pub options: Vec<OptionVm>,
    pub progress_label: String,
    pub progress_percent: u32,
    pub score_label: String,
    pub tags_label: String,
    pub countdown: Option<String>,
    pub can_submit: bool,
    pub submitted: bool,
    pub next_label: &'static str,
    pub feedback: Option<FeedbackVm>,
}

#[must_use]
pub fn map_question(snapshot: &QuestionSnapshot) -> QuestionVm {
    let question = &snapshot.question;
    let (before, after) = question.sentence_parts();
    let submitted = snapshot.feedback.is_some();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let is_selected = snapshot.selected.as_ref() == Some(option.id());
            let state = if submitted {
                if question.is_correct(option.id()) {
                    OptionState::Correct
                } else if is_selected {
                    OptionState::Incorrect
                } else {
                    OptionState::Dimmed
                }
            } else if is_selected {
                OptionState::Selected
            } else {
                OptionState::Idle
            };
            OptionVm {
                id: option.id().clone(),
                key_hint: idx + 1,
                text: option.text().to_owned(),
                state,
            }
        })
        .collect();

    let blank_fill = snapshot
        .selected
        .as_ref()
        .and_then(|id| question.option(id))
        .map(|option| option.text().to_owned());

    let progress = snapshot.progress;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let progress_percent = (progress.fraction() * 100.0).round() as u32;

    QuestionVm {
        before_blank: before.to_owned(),
        after_blank: after.to_owned(),
        blank_fill,
        options,
        progress_label: format!("Question {} of {}", progress.position, progress.total),
        progress_percent,
        score_label: format!("Score: {}", progress.score),
        tags_label: format!(
            "{} · {}",
            question.category().label(),
            question.difficulty().label()
        ),
        countdown: snapshot.remaining_secs.map(format_countdown),
        can_submit: !submitted && snapshot.selected.is_some(),
        submitted,
        next_label: if snapshot.is_last { "See results" } else { "Next question" },
        feedback: snapshot.feedback.as_ref().map(map_feedback),
    }
}

fn map_feedback(feedback: &AnswerFeedback) -> FeedbackVm {
    let explanation = &feedback.explanation;
    let non_empty = |text: &str| (!text.trim().is_empty()).then(|| text.to_owned());
    FeedbackVm {
        is_correct: feedback.is_correct,
        headline: if feedback.is_correct {
            "Correct!"
        } else {
            "Not quite."
        },
        correct_answer: feedback.correct_text.clone(),
        rule: explanation.rule().to_owned(),
        example: non_empty(explanation.example()),
        common_mistake: non_empty(explanation.common_mistake()),
        review_link: explanation.review_link().map(|url| url.as_str().to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::TimerDuration;
    use quiz_core::time::fixed_clock;
    use services::fixtures::numbered_bank;
    use services::{QuizSession, QuizSnapshot, SessionOptions};

    fn running(timer: TimerDuration) -> QuizSession {
        let mut session = QuizSession::new(
            numbered_bank(4),
            SessionOptions {
                timer,
                seed: Some(8),
                clock: fixed_clock(),
                ..SessionOptions::default()
            },
        );
        session.start().unwrap();
        session
    }

    fn question_vm(session: &QuizSession) -> QuestionVm {
        match session.snapshot() {
            QuizSnapshot::Question(snapshot) => map_question(&snapshot),
            other => panic!("expected question snapshot, got {other:?}"),
        }
    }

    #[test]
    fn fresh_question_has_idle_options() {
        let session = running(TimerDuration::Seconds(90));
        let vm = question_vm(&session);
        assert_eq!(vm.progress_label, "Question 1 of 4");
        assert_eq!(vm.countdown.as_deref(), Some("1:30"));
        assert!(vm.options.iter().all(|o| o.state == OptionState::Idle));
        assert_eq!(vm.options[2].key_hint, 3);
        assert!(vm.blank_fill.is_none());
        assert!(!vm.can_submit);
        assert!(vm.before_blank.ends_with("has a "));
    }

    #[test]
    fn wrong_submit_marks_options() {
        let mut session = running(TimerDuration::Off);
        session.select_option(OptionId::from("b")).unwrap();
        let pending = question_vm(&session);
        assert!(pending.can_submit);
        assert_eq!(pending.options[1].state, OptionState::Selected);
        assert!(pending.blank_fill.unwrap().starts_with("wrong"));

        session.submit().unwrap();
        let vm = question_vm(&session);
        let states: Vec<_> = vm.options.iter().map(|o| o.state).collect();
        assert_eq!(
            states,
            vec![OptionState::Correct, OptionState::Incorrect, OptionState::Dimmed]
        );
        let feedback = vm.feedback.unwrap();
        assert_eq!(feedback.headline, "Not quite.");
        assert!(feedback.correct_answer.starts_with("right"));
        assert!(feedback.review_link.is_none());
        assert!(!vm.can_submit);
        assert_eq!(vm.next_label, "Next question");
        assert_eq!(vm.progress_percent, 25);
    }
}
