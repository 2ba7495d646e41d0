use dioxus::prelude::*;

use crate::strings;
use crate::vm::QuestionVm;

#[component]
pub fn QuestionCard(question: QuestionVm, on_select: EventHandler<String>) -> Element {
    let buttons = question.options.iter().map(|option| {
        let label = option.label.clone();
        rsx! {
            button {
                key: "{option.label}",
                class: option.status.class(),
                disabled: option.disabled,
                onclick: move |_| on_select.call(label.clone()),
                "{option.label}"
            }
        }
    });

    rsx! {
        div { class: "question-card",
            div { class: "question-card__image",
                img { src: "{question.image_src}", alt: strings::IMAGE_ALT }
                div { class: "question-card__fade" }
            }
            div { class: "question-card__body",
                h2 { class: "question-card__text", "{question.question}" }
                div { class: "question-card__options", {buttons} }
            }
        }
    }
}
