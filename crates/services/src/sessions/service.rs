use chrono::{DateTime, Duration, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use tracing::info;

use quiz_core::Clock;
use quiz_core::model::{
    Category, Difficulty, Filter, OptionId, Question, QuestionFilters, Tier, TimerDuration,
    UserAnswer, percentage,
};
use quiz_core::time::elapsed_between;

use super::progress::QuizProgress;
use super::sampling::{DEFAULT_SAMPLE_SIZE, sample_working_set};
use crate::bank::QuestionBank;
use crate::error::SessionError;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Which screen the session is on. Always derived from state, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    Home,
    InProgress,
    Finished,
    /// The filters hide every question of the working set.
    Empty,
}

/// How a quiz reached `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinishReason {
    /// The learner moved past the last question.
    Completed,
    /// The countdown reached zero.
    TimeExpired,
    /// The learner ended the quiz early.
    EndedEarly,
}

//
// ─── OPTIONS ───────────────────────────────────────────────────────────────────
//

/// Knobs fixed when a session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub sample_size: usize,
    pub timer: TimerDuration,
    /// Seed for the sampling rng; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub clock: Clock,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            timer: TimerDuration::Off,
            seed: None,
            clock: Clock::System,
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The quiz state machine: `Home → InProgress → Finished`, plus `Empty`.
///
/// The working set is drawn once per session (and again on `restart`). Filters
/// only hide questions of that set. Transitions that fail their guard return a
/// `SessionError` and leave the session untouched.
pub struct QuizSession {
    bank: QuestionBank,
    sample_size: usize,
    clock: Clock,
    rng: StdRng,
    generation: u64,

    working_set: Vec<Question>,
    visible: Vec<usize>,
    filters: QuestionFilters,
    timer: TimerDuration,

    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    finish_reason: Option<FinishReason>,
    current: usize,
    selected: Option<OptionId>,
    submitted: bool,
    remaining_secs: Option<u32>,
    answers: Vec<UserAnswer>,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: QuestionBank, options: SessionOptions) -> Self {
        let mut rng = options
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let working_set = sample_working_set(bank.questions(), options.sample_size, &mut rng);
        let filters = QuestionFilters::default();
        let visible = filters.visible_indices(&working_set);

        Self {
            bank,
            sample_size: options.sample_size,
            clock: options.clock,
            rng,
            generation: 0,
            working_set,
            visible,
            filters,
            timer: options.timer.normalized(),
            started_at: None,
            finished_at: None,
            finish_reason: None,
            current: 0,
            selected: None,
            submitted: false,
            remaining_secs: None,
            answers: Vec::new(),
        }
    }

    // ─── Derived state ─────────────────────────────────────────────────────────

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.finish_reason.is_some() {
            QuizPhase::Finished
        } else if self.visible.is_empty() {
            QuizPhase::Empty
        } else if self.started_at.is_some() {
            QuizPhase::InProgress
        } else {
            QuizPhase::Home
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finish_reason.is_some()
    }

    /// Number of correct answers.
    #[must_use]
    pub fn score(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_correct()).count()
    }

    /// Size of the filtered set.
    #[must_use]
    pub fn total(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn percentage(&self) -> u8 {
        percentage(self.score(), self.total())
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        Tier::from_percentage(self.percentage())
    }

    /// Time since `start`, frozen once the quiz is finished.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        let started_at = self.started_at?;
        let end = self.finished_at.unwrap_or_else(|| self.clock.now());
        Some(elapsed_between(started_at, end))
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: (self.current + 1).min(self.total()),
            total: self.total(),
            answered: self.answers.len(),
            score: self.score(),
        }
    }

    /// Whether a periodic tick is wanted right now.
    #[must_use]
    pub fn timer_should_run(&self) -> bool {
        self.phase() == QuizPhase::InProgress && self.remaining_secs.is_some_and(|secs| secs > 0)
    }

    // ─── Accessors ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Bumped by every `restart`; ticks carry it so a superseded session ignores them.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn working_set(&self) -> &[Question] {
        &self.working_set
    }

    /// Questions of the working set that pass the filters, in quiz order.
    pub fn filtered_questions(&self) -> impl Iterator<Item = &Question> + '_ {
        self.visible.iter().map(|&idx| &self.working_set[idx])
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.visible
            .get(self.current)
            .map(|&idx| &self.working_set[idx])
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn filters(&self) -> QuestionFilters {
        self.filters
    }

    #[must_use]
    pub fn timer(&self) -> TimerDuration {
        self.timer
    }

    #[must_use]
    pub fn remaining_secs(&self) -> Option<u32> {
        self.remaining_secs
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&OptionId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    #[must_use]
    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finish_reason
    }

    /// Fixed clocks can be advanced through this handle.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    // ─── Transitions ───────────────────────────────────────────────────────────

    /// Change either filter. Progress is cleared; the working set is not redrawn.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyFinished` once the quiz is over.
    pub fn configure(
        &mut self,
        difficulty: Option<Filter<Difficulty>>,
        category: Option<Filter<Category>>,
    ) -> Result<(), SessionError> {
        if self.is_finished() {
            return Err(SessionError::AlreadyFinished);
        }
        if let Some(difficulty) = difficulty {
            self.filters.difficulty = difficulty;
        }
        if let Some(category) = category {
            self.filters.category = category;
        }
        self.refilter();
        self.clear_progress();
        Ok(())
    }

    /// Back to `All`/`All`; the only way out of `Empty`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyFinished` once the quiz is over.
    pub fn reset_filters(&mut self) -> Result<(), SessionError> {
        self.configure(Some(Filter::All), Some(Filter::All))
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotInHome` after the quiz has started.
    pub fn set_timer(&mut self, timer: TimerDuration) -> Result<(), SessionError> {
        if self.is_started() {
            return Err(SessionError::NotInHome);
        }
        self.timer = timer.normalized();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotInHome` if already started, or
    /// `SessionError::EmptySelection` if the filters hide every question.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.is_started() {
            return Err(SessionError::NotInHome);
        }
        if self.visible.is_empty() {
            return Err(SessionError::EmptySelection);
        }
        self.started_at = Some(self.clock.now());
        self.remaining_secs = self.timer.secs();
        info!(
            total = self.total(),
            timer = %self.timer,
            generation = self.generation,
            "quiz started"
        );
        Ok(())
    }

    /// Record a pending choice for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadySubmitted` once the answer is locked, or
    /// `SessionError::UnknownOption` for an id the question does not offer.
    pub fn select_option(&mut self, option_id: OptionId) -> Result<(), SessionError> {
        self.require_in_progress()?;
        if self.submitted {
            return Err(SessionError::AlreadySubmitted);
        }
        let offered = self
            .current_question()
            .is_some_and(|question| question.option(&option_id).is_some());
        if !offered {
            return Err(SessionError::UnknownOption(option_id));
        }
        self.selected = Some(option_id);
        Ok(())
    }

    /// Lock in the pending choice and grade it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadySubmitted` or `SessionError::NoPendingChoice`.
    pub fn submit(&mut self) -> Result<&UserAnswer, SessionError> {
        self.require_in_progress()?;
        if self.submitted {
            return Err(SessionError::AlreadySubmitted);
        }
        let Some(choice) = self.selected.clone() else {
            return Err(SessionError::NoPendingChoice);
        };
        let answer = {
            let question = self
                .current_question()
                .ok_or(SessionError::NotInProgress)?;
            UserAnswer::grade(question, choice)
        };

        self.answers.push(answer);
        self.submitted = true;
        self.answers.last().ok_or(SessionError::NotSubmitted)
    }

    /// Move past a submitted question; past the last one the quiz finishes.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotSubmitted` while the current answer is still open.
    pub fn next(&mut self) -> Result<QuizPhase, SessionError> {
        self.require_in_progress()?;
        if !self.submitted {
            return Err(SessionError::NotSubmitted);
        }
        if self.current + 1 >= self.visible.len() {
            self.finish_with(FinishReason::Completed);
        } else {
            self.current += 1;
            self.selected = None;
            self.submitted = false;
        }
        Ok(self.phase())
    }

    /// End a running quiz now. An unsubmitted current question is dropped.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` outside a running quiz.
    pub fn finish(&mut self) -> Result<(), SessionError> {
        self.require_in_progress()?;
        self.finish_with(FinishReason::EndedEarly);
        Ok(())
    }

    /// One second of countdown. Returns the seconds left.
    ///
    /// Reaching zero finishes the quiz; an unsubmitted current question is dropped.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::StaleTick` for a tick from before the last `restart`,
    /// or `SessionError::TimerInactive` when no countdown is running.
    pub fn tick(&mut self, generation: u64) -> Result<u32, SessionError> {
        if generation != self.generation {
            return Err(SessionError::StaleTick {
                expected: self.generation,
                actual: generation,
            });
        }
        if !self.timer_should_run() {
            return Err(SessionError::TimerInactive);
        }
        let remaining = self.remaining_secs.map_or(0, |secs| secs.saturating_sub(1));
        self.remaining_secs = Some(remaining);
        if remaining == 0 {
            self.finish_with(FinishReason::TimeExpired);
        }
        Ok(remaining)
    }

    /// Draw a fresh working set and go back to `Home`.
    ///
    /// Filters and timer choice are kept; everything else is reset.
    pub fn restart(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.working_set =
            sample_working_set(self.bank.questions(), self.sample_size, &mut self.rng);
        self.refilter();
        self.started_at = None;
        self.finished_at = None;
        self.finish_reason = None;
        self.remaining_secs = None;
        self.clear_progress();
        info!(
            generation = self.generation,
            working_set = self.working_set.len(),
            "quiz restarted"
        );
    }

    // ─── Internals ─────────────────────────────────────────────────────────────

    fn require_in_progress(&self) -> Result<(), SessionError> {
        match self.phase() {
            QuizPhase::InProgress => Ok(()),
            QuizPhase::Finished => Err(SessionError::AlreadyFinished),
            QuizPhase::Home | QuizPhase::Empty => Err(SessionError::NotInProgress),
        }
    }

    fn refilter(&mut self) {
        self.visible = self.filters.visible_indices(&self.working_set);
    }

    fn clear_progress(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.selected = None;
        self.submitted = false;
    }

    fn finish_with(&mut self, reason: FinishReason) {
        self.finished_at = Some(self.clock.now());
        self.finish_reason = Some(reason);
        self.selected = None;
        self.submitted = false;
        info!(
            ?reason,
            score = self.score(),
            total = self.total(),
            answered = self.answers.len(),
            "quiz finished"
        );
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("phase", &self.phase())
            .field("generation", &self.generation)
            .field("working_set_len", &self.working_set.len())
            .field("visible_len", &self.visible.len())
            .field("filters", &self.filters)
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("remaining_secs", &self.remaining_secs)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
