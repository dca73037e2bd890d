use dioxus::prelude::*;

use quiz_core::model::{Category, Difficulty, Filter, TimerDuration};
use services::HomeSnapshot;

use crate::vm::QuizIntent;

#[component]
pub(super) fn HomeScreen(
    home: HomeSnapshot,
    bank_size: usize,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let difficulty = home.filters.difficulty;
    let category = home.filters.category;
    let timer = home.timer;
    let can_start = home.available > 0;

    rsx! {
        section { class: "home",
            h2 { "Set up your quiz" }
            p { class: "home__intro",
                "{home.working_set} questions drawn from a bank of {bank_size}."
            }

            div { class: "home__pickers",
                label { class: "picker",
                    span { class: "picker__label", "Difficulty" }
                    select {
                        id: "quiz-difficulty",
                        onchange: move |evt: FormEvent| {
                            if let Ok(filter) = evt.value().parse::<Filter<Difficulty>>() {
                                on_intent.call(QuizIntent::SetDifficulty(filter));
                            }
                        },
                        option { value: "all", selected: difficulty.is_all(), "All levels" }
                        for level in Difficulty::ALL {
                            option {
                                value: level.slug(),
                                selected: difficulty == Filter::Only(level),
                                "{level.label()}"
                            }
                        }
                    }
                }

                label { class: "picker",
                    span { class: "picker__label", "Topic" }
                    select {
                        id: "quiz-category",
                        onchange: move |evt: FormEvent| {
                            if let Ok(filter) = evt.value().parse::<Filter<Category>>() {
                                on_intent.call(QuizIntent::SetCategory(filter));
                            }
                        },
                        option { value: "all", selected: category.is_all(), "All topics" }
                        for topic in Category::ALL {
                            option {
                                value: topic.slug(),
                                selected: category == Filter::Only(topic),
                                "{topic.label()}"
                            }
                        }
                    }
                }

                label { class: "picker",
                    span { class: "picker__label", "Timer" }
                    select {
                        id: "quiz-timer",
                        onchange: move |evt: FormEvent| {
                            if let Ok(choice) = evt.value().parse::<TimerDuration>() {
                                on_intent.call(QuizIntent::SetTimer(choice));
                            }
                        },
                        // Set from the command line; keep it visible so the picker matches.
                        if !timer.is_preset() {
                            option {
                                id: "quiz-timer-custom",
                                value: "{timer}",
                                selected: true,
                                "{timer.label()}"
                            }
                        }
                        for preset in TimerDuration::PRESETS {
                            option {
                                value: "{preset}",
                                selected: timer == preset,
                                "{preset.label()}"
                            }
                        }
                    }
                }
            }

            p { class: "home__available", "{home.available} questions match your choices." }

            button {
                class: "btn btn-primary",
                id: "quiz-start",
                r#type: "button",
                disabled: !can_start,
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "Start quiz"
            }
        }
    }
}
