mod question_vm;
mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use question_vm::{FeedbackVm, OptionState, OptionVm, QuestionVm, map_question};
pub use quiz_vm::{QuizIntent, QuizVm};
pub use results_vm::{CategoryRowVm, ResultsVm, ReviewRowVm, map_results};
pub use time_fmt::{format_countdown, format_elapsed};
