use dioxus::prelude::*;

use crate::vm::QuizIntent;

/// Offered when the filters hide every question; resetting is the only way on.
#[component]
pub(super) fn EmptyScreen(started: bool, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "empty",
            h2 { "No questions match these filters" }
            p { "Reset the filters to bring this session's questions back." }
            if started {
                p { class: "empty__note", "The quiz is still running; it restarts from the first question." }
            }
            button {
                class: "btn btn-secondary",
                id: "quiz-reset-filters",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::ResetFilters),
                "Reset filters"
            }
        }
    }
}
