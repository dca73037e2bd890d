use dioxus::prelude::Key;

use services::QuizSnapshot;

use crate::vm::QuizIntent;

/// Map a key press to an intent for the current screen.
///
/// Digits pick the n-th option while the answer is open; Enter moves the
/// quiz forward (start, submit, next, restart or reset, by screen).
#[must_use]
pub(super) fn intent_for_key(key: &Key, snapshot: &QuizSnapshot) -> Option<QuizIntent> {
    match (key, snapshot) {
        (Key::Enter, QuizSnapshot::Home(home)) => (home.available > 0).then_some(QuizIntent::Start),
        (Key::Enter, QuizSnapshot::Question(question)) => {
            if question.feedback.is_some() {
                Some(QuizIntent::Next)
            } else {
                question.selected.as_ref().map(|_| QuizIntent::Submit)
            }
        }
        (Key::Enter, QuizSnapshot::Results(_)) => Some(QuizIntent::Restart),
        (Key::Enter, QuizSnapshot::Empty(_)) => Some(QuizIntent::ResetFilters),
        (Key::Character(value), QuizSnapshot::Question(question)) if question.feedback.is_none() => {
            let digit = value.parse::<usize>().ok().filter(|n| (1..=9).contains(n))?;
            question
                .question
                .options()
                .get(digit - 1)
                .map(|option| QuizIntent::Select(option.id().clone()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Category, Difficulty, Filter, OptionId};
    use quiz_core::time::fixed_clock;
    use services::fixtures::numbered_bank;
    use services::{QuizSession, SessionOptions};

    fn session() -> QuizSession {
        QuizSession::new(
            numbered_bank(6),
            SessionOptions {
                seed: Some(2),
                clock: fixed_clock(),
                ..SessionOptions::default()
            },
        )
    }

    fn digit(n: &str) -> Key {
        Key::Character(n.to_owned())
    }

    #[test]
    fn enter_starts_from_home() {
        let session = session();
        assert_eq!(
            intent_for_key(&Key::Enter, &session.snapshot()),
            Some(QuizIntent::Start)
        );
        assert_eq!(intent_for_key(&digit("1"), &session.snapshot()), None);
    }

    #[test]
    fn digits_select_then_enter_submits_then_advances() {
        let mut session = session();
        session.start().unwrap();
        assert_eq!(intent_for_key(&Key::Enter, &session.snapshot()), None);
        assert_eq!(
            intent_for_key(&digit("2"), &session.snapshot()),
            Some(QuizIntent::Select(OptionId::from("b")))
        );
        assert_eq!(intent_for_key(&digit("4"), &session.snapshot()), None);
        assert_eq!(intent_for_key(&digit("0"), &session.snapshot()), None);

        session.select_option(OptionId::from("b")).unwrap();
        assert_eq!(
            intent_for_key(&Key::Enter, &session.snapshot()),
            Some(QuizIntent::Submit)
        );
        session.submit().unwrap();
        assert_eq!(
            intent_for_key(&Key::Enter, &session.snapshot()),
            Some(QuizIntent::Next)
        );
        assert_eq!(intent_for_key(&digit("1"), &session.snapshot()), None);
    }

    #[test]
    fn enter_resets_empty_filters() {
        let mut session = session();
        // Fixture ids never pair beginner with subject-verb agreement.
        session
            .configure(
                Some(Filter::Only(Difficulty::Beginner)),
                Some(Filter::Only(Category::SubjectVerbAgreement)),
            )
            .unwrap();
        assert_eq!(
            intent_for_key(&Key::Enter, &session.snapshot()),
            Some(QuizIntent::ResetFilters)
        );
    }
}
