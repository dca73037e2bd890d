use quiz_core::model::{Category, Difficulty, Filter, OptionId, TimerDuration};
use services::{QuizPhase, QuizSession, QuizSnapshot, SessionError};
use tracing::{debug, warn};

/// Everything the learner (or the tick task) can ask the quiz to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    SetDifficulty(Filter<Difficulty>),
    SetCategory(Filter<Category>),
    SetTimer(TimerDuration),
    ResetFilters,
    Start,
    Select(OptionId),
    Submit,
    Next,
    Finish,
    Restart,
    Tick { generation: u64 },
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.session.snapshot()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.session.generation()
    }

    #[must_use]
    pub fn timer_should_run(&self) -> bool {
        self.session.timer_should_run()
    }

    /// Apply one intent. A rejected intent leaves the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns the guard's `SessionError` when the transition is not allowed.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<(), SessionError> {
        let result = match intent.clone() {
            QuizIntent::SetDifficulty(filter) => self.session.configure(Some(filter), None),
            QuizIntent::SetCategory(filter) => self.session.configure(None, Some(filter)),
            QuizIntent::SetTimer(timer) => self.session.set_timer(timer),
            QuizIntent::ResetFilters => self.session.reset_filters(),
            QuizIntent::Start => self.session.start(),
            QuizIntent::Select(option_id) => self.session.select_option(option_id),
            QuizIntent::Submit => self.session.submit().map(|_| ()),
            QuizIntent::Next => self.session.next().map(|_| ()),
            QuizIntent::Finish => self.session.finish(),
            QuizIntent::Restart => {
                self.session.restart();
                Ok(())
            }
            QuizIntent::Tick { generation } => self.session.tick(generation).map(|_| ()),
        };

        match &result {
            Err(err @ SessionError::StaleTick { .. }) => warn!(%err, "stale tick dropped"),
            Err(err) => debug!(?intent, %err, "intent ignored"),
            Ok(()) => {}
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_clock;
    use services::SessionOptions;
    use services::fixtures::numbered_bank;

    fn vm(timer: TimerDuration) -> QuizVm {
        QuizVm::new(QuizSession::new(
            numbered_bank(6),
            SessionOptions {
                timer,
                seed: Some(3),
                clock: fixed_clock(),
                ..SessionOptions::default()
            },
        ))
    }

    #[test]
    fn intents_drive_the_session() {
        let mut vm = vm(TimerDuration::Off);
        vm.dispatch(QuizIntent::Start).unwrap();
        vm.dispatch(QuizIntent::Select(OptionId::from("a"))).unwrap();
        vm.dispatch(QuizIntent::Submit).unwrap();
        vm.dispatch(QuizIntent::Next).unwrap();
        assert_eq!(vm.session().score(), 1);
        assert_eq!(vm.session().current_index(), 1);

        vm.dispatch(QuizIntent::Finish).unwrap();
        assert_eq!(vm.phase(), QuizPhase::Finished);
        vm.dispatch(QuizIntent::Restart).unwrap();
        assert_eq!(vm.phase(), QuizPhase::Home);
        assert_eq!(vm.generation(), 1);
    }

    #[test]
    fn rejected_intents_report_the_guard() {
        let mut vm = vm(TimerDuration::Off);
        assert_eq!(
            vm.dispatch(QuizIntent::Submit),
            Err(SessionError::NotInProgress)
        );
        vm.dispatch(QuizIntent::Start).unwrap();
        assert_eq!(
            vm.dispatch(QuizIntent::Submit),
            Err(SessionError::NoPendingChoice)
        );
        assert_eq!(
            vm.dispatch(QuizIntent::SetTimer(TimerDuration::Seconds(60))),
            Err(SessionError::NotInHome)
        );
    }

    #[test]
    fn ticks_only_run_with_a_timer() {
        let mut timed = vm(TimerDuration::Seconds(2));
        timed.dispatch(QuizIntent::Start).unwrap();
        assert!(timed.timer_should_run());
        timed.dispatch(QuizIntent::Tick { generation: 0 }).unwrap();
        timed.dispatch(QuizIntent::Tick { generation: 0 }).unwrap();
        assert_eq!(timed.phase(), QuizPhase::Finished);
        assert!(!timed.timer_should_run());

        let mut untimed = vm(TimerDuration::Off);
        untimed.dispatch(QuizIntent::Start).unwrap();
        assert!(!untimed.timer_should_run());
    }
}
