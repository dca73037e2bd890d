use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use quiz_core::model::{
    AnswerOption, Category, Difficulty, Explanation, OptionId, Question, QuestionDraft, QuestionId,
};

use crate::error::BankError;

const BUILTIN_BANK: &str = include_str!("../data/questions.json");

//
// ─── RECORDS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestionRecord {
    id: u32,
    sentence: String,
    options: Vec<OptionRecord>,
    correct_option_id: String,
    difficulty: Difficulty,
    category: Category,
    explanation: ExplanationRecord,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionRecord {
    id: String,
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExplanationRecord {
    rule: String,
    #[serde(default)]
    example: String,
    #[serde(default)]
    common_mistake: String,
    #[serde(default)]
    review_link: Option<String>,
}

impl QuestionRecord {
    fn into_question(self) -> Result<Question, quiz_core::Error> {
        let explanation = Explanation::new(
            self.explanation.rule,
            self.explanation.example,
            self.explanation.common_mistake,
            self.explanation.review_link.as_deref(),
        )?;
        let mut options = Vec::with_capacity(self.options.len());
        for option in self.options {
            let id: OptionId = option.id.parse()?;
            options.push(AnswerOption::new(id, option.text));
        }

        let draft = QuestionDraft {
            id: QuestionId::new(self.id),
            sentence: self.sentence,
            options,
            correct_option_id: self.correct_option_id.parse()?,
            difficulty: self.difficulty,
            category: self.category,
            explanation,
        };
        Ok(draft.validate()?)
    }
}

//
// ─── BANK ──────────────────────────────────────────────────────────────────────
//

/// The read-only pool every session samples from.
///
/// Cloning shares the same questions; nothing ever mutates them after load.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    /// The bank compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `BankError` if the embedded data fails validation.
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_json(BUILTIN_BANK)
    }

    /// # Errors
    ///
    /// Returns `BankError::Io` if the file cannot be read, or any validation error.
    pub fn from_path(path: &Path) -> Result<Self, BankError> {
        let raw = std::fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// # Errors
    ///
    /// Returns `BankError::Parse` for malformed JSON, `BankError::InvalidQuestion` for a
    /// record that fails validation, `BankError::DuplicateId` or `BankError::Empty`.
    pub fn from_json(raw: &str) -> Result<Self, BankError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(raw)?;
        let mut questions = Vec::with_capacity(records.len());
        for record in records {
            let id = QuestionId::new(record.id);
            let question = record
                .into_question()
                .map_err(|source| BankError::InvalidQuestion { id, source })?;
            questions.push(question);
        }
        Self::from_questions(questions)
    }

    /// # Errors
    ///
    /// Returns `BankError::DuplicateId` or `BankError::Empty`.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(BankError::DuplicateId(question.id()));
            }
        }
        Ok(Self {
            questions: questions.into(),
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
