use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::{ImageRef, QuizItem};
use services::{ProviderError, QuizProvider, SessionState};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

/// Hands out queued outcomes, then fails with `EmptyResponse`.
pub struct ScriptedProvider {
    outcomes: Mutex<VecDeque<Result<QuizItem, ProviderError>>>,
}

impl ScriptedProvider {
    pub fn new(outcomes: Vec<Result<QuizItem, ProviderError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
        }
    }
}

#[async_trait::async_trait]
impl QuizProvider for ScriptedProvider {
    async fn fetch_quiz_item(&self) -> Result<QuizItem, ProviderError> {
        self.outcomes
            .lock()
            .expect("outcomes lock")
            .pop_front()
            .unwrap_or(Err(ProviderError::EmptyResponse))
    }
}

pub fn sample_item() -> QuizItem {
    QuizItem::new(
        "من فاز بكأس العالم 2010؟",
        vec!["هولندا".into(), "إسبانيا".into(), "ألمانيا".into()],
        "إسبانيا",
        ImageRef::jpeg(b"X").expect("image"),
    )
    .expect("sample item")
}

struct TestApp {
    provider: Arc<dyn QuizProvider>,
}

impl UiApp for TestApp {
    fn quiz_provider(&self) -> Arc<dyn QuizProvider> {
        Arc::clone(&self.provider)
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<dyn UiApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for QuizHarnessProps {}

#[component]
fn QuizViewHarness(props: QuizHarnessProps) -> Element {
    use_context_provider(|| build_app_context(&props.app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn state(&self) -> SessionState {
        let controller = self.handles.controller();
        self.dom.in_runtime(|| controller.peek().state().clone())
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness(provider: Arc<dyn QuizProvider>) -> ViewHarness {
    let app: Arc<dyn UiApp> = Arc::new(TestApp { provider });
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizViewHarness,
        QuizHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
