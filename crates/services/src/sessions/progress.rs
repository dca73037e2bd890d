/// Where the learner is in the filtered set, for progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizProgress {
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub score: usize,
}

impl QuizProgress {
    /// Share of questions answered, as a value in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction = self.answered as f32 / self.total as f32;
        fraction.min(1.0)
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }
}
