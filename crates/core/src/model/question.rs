use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::model::ids::{OptionId, QuestionId};
use crate::model::taxonomy::{Category, Difficulty};

/// Marks the gap the learner fills in.
pub const BLANK_MARKER: &str = "___";

pub const MIN_OPTIONS: usize = 2;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("sentence cannot be empty")]
    EmptySentence,

    #[error("sentence must contain exactly one blank marker, found {found}")]
    BlankCount { found: usize },

    #[error("a question needs at least two options, got {got}")]
    TooFewOptions { got: usize },

    #[error("option id {0} appears more than once")]
    DuplicateOption(OptionId),

    #[error("option {0} has no text")]
    EmptyOptionText(OptionId),

    #[error("correct option {0} is not one of the options")]
    UnknownCorrectOption(OptionId),

    #[error("explanation rule cannot be empty")]
    EmptyRule,

    #[error("review link is not a valid absolute URL: {0}")]
    InvalidReviewLink(String),
}

//
// ─── OPTIONS & EXPLANATION ─────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    id: OptionId,
    text: String,
}

impl AnswerOption {
    #[must_use]
    pub fn new(id: impl Into<OptionId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &OptionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Teaching notes shown once the learner has answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    rule: String,
    example: String,
    common_mistake: String,
    review_link: Option<Url>,
}

impl Explanation {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyRule` if `rule` is blank.
    /// Returns `QuestionError::InvalidReviewLink` if `review_link` does not parse as a URL.
    pub fn new(
        rule: impl Into<String>,
        example: impl Into<String>,
        common_mistake: impl Into<String>,
        review_link: Option<&str>,
    ) -> Result<Self, QuestionError> {
        let rule = rule.into();
        if rule.trim().is_empty() {
            return Err(QuestionError::EmptyRule);
        }
        let review_link = review_link
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| Url::parse(raw).map_err(|_| QuestionError::InvalidReviewLink(raw.into())))
            .transpose()?;

        Ok(Self {
            rule,
            example: example.into(),
            common_mistake: common_mistake.into(),
            review_link,
        })
    }

    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    #[must_use]
    pub fn example(&self) -> &str {
        &self.example
    }

    #[must_use]
    pub fn common_mistake(&self) -> &str {
        &self.common_mistake
    }

    #[must_use]
    pub fn review_link(&self) -> Option<&Url> {
        self.review_link.as_ref()
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Fields of a question before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub sentence: String,
    pub options: Vec<AnswerOption>,
    pub correct_option_id: OptionId,
    pub difficulty: Difficulty,
    pub category: Category,
    pub explanation: Explanation,
}

/// A validated fill-in-the-blank question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    sentence: String,
    options: Vec<AnswerOption>,
    correct_option_id: OptionId,
    difficulty: Difficulty,
    category: Category,
    explanation: Explanation,
}

impl QuestionDraft {
    /// # Errors
    ///
    /// Returns `QuestionError` when the sentence, options, or correct option are malformed.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.sentence.trim().is_empty() {
            return Err(QuestionError::EmptySentence);
        }
        let found = self.sentence.matches(BLANK_MARKER).count();
        if found != 1 {
            return Err(QuestionError::BlankCount { found });
        }
        if self.options.len() < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                got: self.options.len(),
            });
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.id()) {
                return Err(QuestionError::DuplicateOption(option.id().clone()));
            }
            if option.text().trim().is_empty() {
                return Err(QuestionError::EmptyOptionText(option.id().clone()));
            }
        }
        if !seen.contains(&self.correct_option_id) {
            return Err(QuestionError::UnknownCorrectOption(self.correct_option_id));
        }

        Ok(Question {
            id: self.id,
            sentence: self.sentence,
            options: self.options,
            correct_option_id: self.correct_option_id,
            difficulty: self.difficulty,
            category: self.category,
            explanation: self.explanation,
        })
    }
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    /// Text before and after the blank.
    #[must_use]
    pub fn sentence_parts(&self) -> (&str, &str) {
        self.sentence
            .split_once(BLANK_MARKER)
            .unwrap_or((self.sentence.as_str(), ""))
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, id: &OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id() == id)
    }

    #[must_use]
    pub fn correct_option_id(&self) -> &OptionId {
        &self.correct_option_id
    }

    #[must_use]
    pub fn correct_option(&self) -> &AnswerOption {
        // Validation guarantees the correct id is present.
        self.option(&self.correct_option_id)
            .unwrap_or(&self.options[0])
    }

    #[must_use]
    pub fn is_correct(&self, selected: &OptionId) -> bool {
        *selected == self.correct_option_id
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn explanation(&self) -> &Explanation {
        &self.explanation
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn explanation() -> Explanation {
        Explanation::new(
            "Use the past simple for finished actions.",
            "She walked home.",
            "She walk home yesterday.",
            Some("https://example.org/past-simple"),
        )
        .unwrap()
    }

    fn draft() -> QuestionDraft {
        QuestionDraft {
            id: QuestionId::new(1),
            sentence: "Yesterday she ___ home.".into(),
            options: vec![
                AnswerOption::new("a", "walked"),
                AnswerOption::new("b", "walks"),
                AnswerOption::new("c", "walking"),
            ],
            correct_option_id: OptionId::from("a"),
            difficulty: Difficulty::Beginner,
            category: Category::Tenses,
            explanation: explanation(),
        }
    }

    #[test]
    fn valid_draft_becomes_question() {
        let question = draft().validate().unwrap();
        assert_eq!(question.sentence_parts(), ("Yesterday she ", " home."));
        assert_eq!(question.correct_option().text(), "walked");
        assert!(question.is_correct(&OptionId::from("a")));
        assert!(!question.is_correct(&OptionId::from("b")));
    }

    #[test]
    fn sentence_needs_exactly_one_blank() {
        let mut none = draft();
        none.sentence = "Yesterday she walked home.".into();
        assert_eq!(none.validate(), Err(QuestionError::BlankCount { found: 0 }));

        let mut two = draft();
        two.sentence = "___ she ___ home.".into();
        assert_eq!(two.validate(), Err(QuestionError::BlankCount { found: 2 }));
    }

    #[test]
    fn many_options_are_accepted() {
        let mut wide = draft();
        for (id, text) in [("d", "walker"), ("e", "walk"), ("f", "was walk")] {
            wide.options.push(AnswerOption::new(id, text));
        }
        assert_eq!(wide.validate().unwrap().options().len(), 6);
    }

    #[test]
    fn options_are_checked() {
        let mut single = draft();
        single.options.truncate(1);
        assert_eq!(
            single.validate(),
            Err(QuestionError::TooFewOptions { got: 1 })
        );

        let mut dup = draft();
        dup.options.push(AnswerOption::new("a", "walk"));
        assert_eq!(
            dup.validate(),
            Err(QuestionError::DuplicateOption(OptionId::from("a")))
        );

        let mut missing = draft();
        missing.correct_option_id = OptionId::from("z");
        assert_eq!(
            missing.validate(),
            Err(QuestionError::UnknownCorrectOption(OptionId::from("z")))
        );
    }

    #[test]
    fn review_link_must_be_a_url() {
        let err = Explanation::new("rule", "", "", Some("not a link")).unwrap_err();
        assert!(matches!(err, QuestionError::InvalidReviewLink(_)));

        let blank = Explanation::new("rule", "", "", Some("  ")).unwrap();
        assert!(blank.review_link().is_none());
    }
}
