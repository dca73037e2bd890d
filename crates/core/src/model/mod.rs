mod answer;
mod evaluation;
mod filter;
mod ids;
mod question;
mod taxonomy;
mod timer;

pub use answer::UserAnswer;
pub use evaluation::{Tier, percentage};
pub use filter::{Filter, QuestionFilters};
pub use ids::{OptionId, ParseIdError, QuestionId};
pub use question::{
    AnswerOption, BLANK_MARKER, Explanation, MIN_OPTIONS, Question, QuestionDraft, QuestionError,
};
pub use taxonomy::{Category, Difficulty, ParseSlugError};
pub use timer::TimerDuration;
