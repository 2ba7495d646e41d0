use dioxus::prelude::*;
use services::SessionController;
use tracing::debug;

use crate::context::AppContext;
use crate::strings;
use crate::views::{LoadingSpinner, QuestionCard};
use crate::vm::{QuizIntent, QuizScreen, screen_for};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = use_signal(SessionController::new);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut controller = controller;

        let Some(trigger) = intent.fetch_trigger() else {
            if let QuizIntent::Select(answer) = intent {
                let result = controller.write().select_answer(&answer);
                if let Err(err) = result {
                    debug!(error = %err, "ignored answer selection");
                }
            }
            return;
        };

        let started = controller.write().begin_fetch(trigger);
        let ticket = match started {
            Ok(ticket) => ticket,
            Err(err) => {
                debug!(error = %err, ?trigger, "ignored fetch trigger");
                return;
            }
        };

        let provider = ctx.quiz_provider();
        spawn(async move {
            let outcome = provider.fetch_quiz_item().await;
            controller.write().complete_fetch(ticket, outcome);
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, controller);
            }
        }
    }

    let screen = screen_for(controller.read().state());

    rsx! {
        div { class: "quiz",
            match screen {
                QuizScreen::Error { message } => rsx! {
                    div { class: "quiz-error",
                        p { class: "quiz-error__message", "{message}" }
                        button {
                            id: "quiz-retry",
                            class: "btn btn--primary",
                            onclick: move |_| dispatch_intent.call(QuizIntent::Retry),
                            "{strings::RETRY_BUTTON}"
                        }
                    }
                },
                QuizScreen::Loading => rsx! {
                    LoadingSpinner { message: strings::LOADING_MESSAGE }
                },
                QuizScreen::Menu => rsx! {
                    div { class: "menu",
                        h1 { class: "menu__title", "{strings::MENU_TITLE}" }
                        p { class: "menu__tagline", "{strings::MENU_TAGLINE}" }
                        button {
                            id: "quiz-start",
                            class: "btn btn--primary btn--large",
                            onclick: move |_| dispatch_intent.call(QuizIntent::Start),
                            "{strings::START_BUTTON}"
                        }
                    }
                },
                QuizScreen::Question(question) => rsx! {
                    div { class: "round",
                        div { class: "score-badge", "{question.score_label}" }
                        QuestionCard {
                            question: question.clone(),
                            on_select: move |answer: String| {
                                dispatch_intent.call(QuizIntent::Select(answer));
                            },
                        }
                        if question.show_next {
                            button {
                                id: "quiz-next",
                                class: "btn btn--next",
                                onclick: move |_| dispatch_intent.call(QuizIntent::Next),
                                "{strings::NEXT_BUTTON}"
                            }
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    controller: Rc<RefCell<Option<Signal<SessionController>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        controller: Signal<SessionController>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.controller.borrow_mut() = Some(controller);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn controller(&self) -> Signal<SessionController> {
        (*self.controller.borrow()).expect("quiz controller registered")
    }
}
