use std::fmt;
use std::str::FromStr;

use crate::model::question::Question;
use crate::model::taxonomy::{Category, Difficulty};

/// Either every value, or one specific value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "all" {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

/// Difficulty and category filters applied to a working set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct QuestionFilters {
    pub difficulty: Filter<Difficulty>,
    pub category: Filter<Category>,
}

impl QuestionFilters {
    #[must_use]
    pub fn new(difficulty: Filter<Difficulty>, category: Filter<Category>) -> Self {
        Self {
            difficulty,
            category,
        }
    }

    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        self.difficulty.matches(&question.difficulty())
            && self.category.matches(&question.category())
    }

    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.difficulty.is_all() && self.category.is_all()
    }

    /// Positions in `questions` that pass both filters, in order.
    #[must_use]
    pub fn visible_indices(&self, questions: &[Question]) -> Vec<usize> {
        questions
            .iter()
            .enumerate()
            .filter(|(_, question)| self.matches(question))
            .map(|(idx, _)| idx)
            .collect()
    }
}
