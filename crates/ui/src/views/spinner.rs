use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(#[props(into)] message: String) -> Element {
    rsx! {
        div { class: "spinner",
            div { class: "spinner__ring" }
            p { class: "spinner__message", "{message}" }
        }
    }
}
