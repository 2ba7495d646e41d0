use dioxus::prelude::*;

use crate::strings;
use crate::views::QuizView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{strings::WINDOW_TITLE}" }

        div { class: "app-root", dir: "rtl", lang: "ar",
            div { class: "backdrop" }
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                main { class: "content",
                    QuizView {}
                }
            }
        }
    }
}
