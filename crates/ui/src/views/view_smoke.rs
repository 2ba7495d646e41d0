use std::sync::Arc;

use dioxus::prelude::*;
use services::{LOAD_ERROR_MESSAGE, Phase, ProviderError};

use crate::strings;
use crate::views::LoadingSpinner;
use crate::views::test_harness::{ScriptedProvider, sample_item, setup_quiz_harness};
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn menu_renders_start_button() {
    let harness = setup_quiz_harness(Arc::new(ScriptedProvider::new(Vec::new())));
    let html = harness.render();
    assert!(html.contains(strings::MENU_TITLE), "missing title in {html}");
    assert!(html.contains(strings::START_BUTTON), "missing start in {html}");
    assert!(html.contains("quiz-start"));
}

#[test]
fn loading_spinner_renders_message() {
    let html = dioxus_ssr::render_element(rsx! {
        LoadingSpinner { message: strings::LOADING_MESSAGE }
    });
    assert!(html.contains(strings::LOADING_MESSAGE));
    assert!(html.contains("spinner"));
}

#[tokio::test(flavor = "current_thread")]
async fn start_renders_question_with_options() {
    let mut harness = setup_quiz_harness(Arc::new(ScriptedProvider::new(vec![Ok(sample_item())])));

    harness.dispatch(QuizIntent::Start);
    harness.drive_async().await;

    assert_eq!(harness.state().phase(), Phase::Playing);
    let html = harness.render();
    assert!(html.contains("من فاز بكأس العالم 2010؟"), "missing question in {html}");
    assert!(html.contains("إسبانيا"));
    assert!(html.contains("هولندا"));
    assert!(html.contains("data:image/jpeg;base64,WA=="));
    assert!(html.contains(&strings::score_label(0)));
    assert!(!html.contains(strings::NEXT_BUTTON));
}

#[tokio::test(flavor = "current_thread")]
async fn selecting_answer_reveals_result_and_next() {
    let mut harness = setup_quiz_harness(Arc::new(ScriptedProvider::new(vec![Ok(sample_item())])));

    harness.dispatch(QuizIntent::Start);
    harness.drive_async().await;
    harness.dispatch(QuizIntent::Select("إسبانيا".into()));

    let state = harness.state();
    assert_eq!(state.phase(), Phase::ShowingResult);
    assert_eq!(state.score(), 1);

    let html = harness.render();
    assert!(html.contains(&strings::score_label(1)), "missing score in {html}");
    assert!(html.contains(strings::NEXT_BUTTON));
    assert!(html.contains("option--correct"));
}

#[tokio::test(flavor = "current_thread")]
async fn failed_fetch_renders_error_with_retry() {
    let mut harness = setup_quiz_harness(Arc::new(ScriptedProvider::new(vec![Err(
        ProviderError::EmptyResponse,
    )])));

    harness.dispatch(QuizIntent::Start);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains(LOAD_ERROR_MESSAGE), "missing error in {html}");
    assert!(html.contains(strings::RETRY_BUTTON));
    assert!(!html.contains(strings::START_BUTTON));
}

#[tokio::test(flavor = "current_thread")]
async fn retry_after_failure_starts_a_fresh_round() {
    let mut harness = setup_quiz_harness(Arc::new(ScriptedProvider::new(vec![
        Err(ProviderError::MalformedResponse("missing field".into())),
        Ok(sample_item()),
    ])));

    harness.dispatch(QuizIntent::Start);
    harness.drive_async().await;
    assert!(harness.state().load_error().is_some());

    harness.dispatch(QuizIntent::Retry);
    harness.drive_async().await;

    let state = harness.state();
    assert_eq!(state.phase(), Phase::Playing);
    assert!(state.load_error().is_none());
    assert_eq!(state.score(), 0);
    assert!(!harness.render().contains("quiz-retry"));
}
