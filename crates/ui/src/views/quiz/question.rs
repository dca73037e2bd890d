use dioxus::prelude::*;

use crate::vm::{FeedbackVm, OptionVm, QuizIntent, QuestionVm};

#[component]
pub(super) fn QuestionScreen(vm: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let blank = vm.blank_fill.clone().unwrap_or_else(|| "_____".to_owned());
    let progress_style = format!("width: {}%", vm.progress_percent);

    rsx! {
        section { class: "question",
            header { class: "question__header",
                span { class: "question__progress", "{vm.progress_label}" }
                span { class: "question__score", "{vm.score_label}" }
                if let Some(countdown) = vm.countdown.as_deref() {
                    span { class: "question__timer", id: "quiz-timer-label", "⏱ {countdown}" }
                }
            }
            div { class: "progress-bar",
                div { class: "progress-bar__fill", style: "{progress_style}" }
            }
            p { class: "question__tags", "{vm.tags_label}" }

            p { class: "question__sentence",
                "{vm.before_blank}"
                span { class: "question__blank", "{blank}" }
                "{vm.after_blank}"
            }

            div { class: "question__options", role: "radiogroup",
                for option in vm.options.iter().cloned() {
                    OptionButton {
                        key: "{option.id}",
                        option,
                        locked: vm.submitted,
                        on_intent,
                    }
                }
            }

            if let Some(feedback) = vm.feedback.clone() {
                FeedbackPanel { feedback }
            }

            footer { class: "question__actions",
                button {
                    class: "btn btn-ghost",
                    id: "quiz-finish",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Finish),
                    "End quiz"
                }
                if vm.submitted {
                    button {
                        class: "btn btn-primary",
                        id: "quiz-next",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Next),
                        "{vm.next_label}"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        id: "quiz-submit",
                        r#type: "button",
                        disabled: !vm.can_submit,
                        onclick: move |_| on_intent.call(QuizIntent::Submit),
                        "Check answer"
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, locked: bool, on_intent: EventHandler<QuizIntent>) -> Element {
    let id = option.id.clone();
    rsx! {
        button {
            class: "{option.state.class()}",
            r#type: "button",
            role: "radio",
            disabled: locked,
            onclick: move |_| on_intent.call(QuizIntent::Select(id.clone())),
            span { class: "option__key", "{option.key_hint}" }
            span { class: "option__text", "{option.text}" }
        }
    }
}

#[component]
fn FeedbackPanel(feedback: FeedbackVm) -> Element {
    let class = if feedback.is_correct {
        "feedback feedback--correct"
    } else {
        "feedback feedback--incorrect"
    };
    rsx! {
        div { class: "{class}", role: "status",
            h3 { class: "feedback__headline", "{feedback.headline}" }
            if !feedback.is_correct {
                p { class: "feedback__answer", "Correct answer: {feedback.correct_answer}" }
            }
            p { class: "feedback__rule", "{feedback.rule}" }
            if let Some(example) = feedback.example.as_deref() {
                p { class: "feedback__example", "Example: {example}" }
            }
            if let Some(mistake) = feedback.common_mistake.as_deref() {
                p { class: "feedback__mistake", "Common mistake: {mistake}" }
            }
            if let Some(link) = feedback.review_link.as_deref() {
                a {
                    class: "feedback__link",
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Review this rule"
                }
            }
        }
    }
}
