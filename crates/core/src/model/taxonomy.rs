use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {raw:?}")]
pub struct ParseSlugError {
    kind: &'static str,
    raw: String,
}

impl ParseSlugError {
    pub(crate) fn new(kind: &'static str, raw: &str) -> Self {
        Self {
            kind,
            raw: raw.to_string(),
        }
    }
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// How hard a question is for a middle-school learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Difficulty {
    type Err = ParseSlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.slug() == s.trim())
            .ok_or_else(|| ParseSlugError::new("difficulty", s))
    }
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Grammar topic a question practices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Tenses,
    SubjectVerbAgreement,
    Articles,
    Prepositions,
    Pronouns,
    Modals,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Tenses,
        Category::SubjectVerbAgreement,
        Category::Articles,
        Category::Prepositions,
        Category::Pronouns,
        Category::Modals,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::Tenses => "tenses",
            Category::SubjectVerbAgreement => "subject_verb_agreement",
            Category::Articles => "articles",
            Category::Prepositions => "prepositions",
            Category::Pronouns => "pronouns",
            Category::Modals => "modals",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Tenses => "Verb Tenses",
            Category::SubjectVerbAgreement => "Subject-Verb Agreement",
            Category::Articles => "Articles",
            Category::Prepositions => "Prepositions",
            Category::Pronouns => "Pronouns",
            Category::Modals => "Modal Verbs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = ParseSlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s.trim())
            .ok_or_else(|| ParseSlugError::new("category", s))
    }
}
