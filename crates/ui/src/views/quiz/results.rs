use dioxus::prelude::*;

use crate::vm::{QuizIntent, ResultsVm};

#[component]
pub(super) fn ResultsScreen(vm: ResultsVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "results",
            h2 { class: "results__title", "{vm.tier_title}" }
            p { class: "results__score",
                span { class: "results__fraction", "{vm.score_label}" }
                span { class: "results__percentage", "{vm.percentage_label}" }
            }
            p { class: "results__feedback", "{vm.tier_feedback}" }
            if let Some(note) = vm.reason_note.as_deref() {
                p { class: "results__note", "{note}" }
            }
            if let Some(elapsed) = vm.elapsed_label.as_deref() {
                p { class: "results__elapsed", "Time taken: {elapsed}" }
            }

            if !vm.categories.is_empty() {
                h3 { "By topic" }
                table { class: "results__categories",
                    tbody {
                        for row in vm.categories.iter() {
                            tr {
                                td { "{row.label}" }
                                td { class: "results__cell--score", "{row.score_label}" }
                            }
                        }
                    }
                }
            }

            if !vm.review.is_empty() {
                h3 { "Your answers" }
                ol { class: "results__review",
                    for row in vm.review.iter() {
                        li {
                            class: if row.is_correct { "review review--correct" } else { "review review--incorrect" },
                            p { class: "review__sentence", "{row.sentence}" }
                            p { class: "review__answer", "{row.answer_label}" }
                        }
                    }
                }
            }

            button {
                class: "btn btn-primary",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Try a new quiz"
            }
        }
    }
}
