use quiz_core::QuizItem;
use tracing::{debug, error, info};

use super::state::{LoadError, Phase, SessionState};
use crate::error::{ProviderError, TransitionError};
use crate::provider::QuizProvider;

/// User actions that acquire a new question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchTrigger {
    StartGame,
    NextQuestion,
    Retry,
}

impl FetchTrigger {
    const fn resets_score(self) -> bool {
        matches!(self, Self::StartGame | Self::Retry)
    }
}

/// Proof that a fetch was started; hand it back to [`SessionController::complete_fetch`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a started fetch must be completed or the session stays loading"]
pub struct FetchTicket {
    id: u64,
    trigger: FetchTrigger,
}

impl FetchTicket {
    #[must_use]
    pub fn trigger(&self) -> FetchTrigger {
        self.trigger
    }
}

/// Result of selecting an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub score: u32,
}

/// Sole writer of a [`SessionState`].
///
/// Fetches are split into [`begin_fetch`](Self::begin_fetch) and
/// [`complete_fetch`](Self::complete_fetch) so callers that keep the controller
/// behind a lock never hold it across the provider call. The async
/// `start_game` / `next_question` / `retry` methods run both halves back to
/// back.
#[derive(Debug, Default)]
pub struct SessionController {
    state: SessionState,
    next_fetch_id: u64,
    in_flight: Option<u64>,
}

impl SessionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Validate `trigger`, apply its resets and mark the session as loading.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::FetchInFlight` while another fetch is pending,
    /// and a phase-specific `TransitionError` when `trigger` is not valid in
    /// the current phase. The state is left untouched on error.
    pub fn begin_fetch(&mut self, trigger: FetchTrigger) -> Result<FetchTicket, TransitionError> {
        if self.state.is_loading {
            return Err(TransitionError::FetchInFlight);
        }
        match trigger {
            FetchTrigger::StartGame if self.state.phase != Phase::Menu => {
                return Err(TransitionError::NotInMenu);
            }
            FetchTrigger::Retry if self.state.phase != Phase::Menu => {
                return Err(TransitionError::NotInMenu);
            }
            FetchTrigger::Retry if self.state.load_error.is_none() => {
                return Err(TransitionError::NoErrorToRetry);
            }
            FetchTrigger::NextQuestion if self.state.phase != Phase::ShowingResult => {
                return Err(TransitionError::NotShowingResult);
            }
            _ => {}
        }

        if trigger.resets_score() {
            self.state.score = 0;
        }
        self.state.selected_answer = None;
        self.state.load_error = None;
        self.state.is_loading = true;

        let id = self.next_fetch_id;
        self.next_fetch_id = self.next_fetch_id.wrapping_add(1);
        self.in_flight = Some(id);
        info!(?trigger, score = self.state.score, "quiz fetch started");

        Ok(FetchTicket { id, trigger })
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Loading flag, item-or-error and phase change together. Returns `false`
    /// (and changes nothing) when `ticket` is not the fetch in flight.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<QuizItem, ProviderError>,
    ) -> bool {
        if self.in_flight != Some(ticket.id) {
            debug!(trigger = ?ticket.trigger, "ignoring stale fetch result");
            return false;
        }

        self.in_flight = None;
        self.state.is_loading = false;
        self.state.selected_answer = None;
        match outcome {
            Ok(item) => {
                info!(trigger = ?ticket.trigger, "quiz item loaded");
                self.state.current_item = Some(item);
                self.state.load_error = None;
                self.state.phase = Phase::Playing;
            }
            Err(err) => {
                error!(trigger = ?ticket.trigger, error = %err, "failed to fetch quiz item");
                self.state.current_item = None;
                self.state.load_error = Some(LoadError::new(err.kind()));
                self.state.phase = Phase::Menu;
            }
        }
        true
    }

    /// Record the user's answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::NotPlaying` outside `Phase::Playing` (which
    /// includes a second selection for the same question),
    /// `TransitionError::NoCurrentItem` without a loaded question, and
    /// `TransitionError::UnknownOption` for an answer that is not an option.
    pub fn select_answer(&mut self, answer: &str) -> Result<AnswerOutcome, TransitionError> {
        if self.state.phase != Phase::Playing || self.state.selected_answer.is_some() {
            return Err(TransitionError::NotPlaying);
        }
        let item = self
            .state
            .current_item
            .as_ref()
            .ok_or(TransitionError::NoCurrentItem)?;
        if !item.has_option(answer) {
            return Err(TransitionError::UnknownOption(answer.to_string()));
        }

        let correct = item.is_correct(answer);
        if correct {
            self.state.score = self.state.score.saturating_add(1);
        }
        self.state.selected_answer = Some(answer.to_string());
        self.state.phase = Phase::ShowingResult;
        debug!(correct, score = self.state.score, "answer selected");

        Ok(AnswerOutcome {
            correct,
            score: self.state.score,
        })
    }

    /// # Errors
    ///
    /// See [`begin_fetch`](Self::begin_fetch). Provider failures are recorded
    /// in the state, not returned.
    pub async fn start_game(&mut self, provider: &dyn QuizProvider) -> Result<(), TransitionError> {
        self.run_fetch(FetchTrigger::StartGame, provider).await
    }

    /// # Errors
    ///
    /// See [`begin_fetch`](Self::begin_fetch).
    pub async fn next_question(
        &mut self,
        provider: &dyn QuizProvider,
    ) -> Result<(), TransitionError> {
        self.run_fetch(FetchTrigger::NextQuestion, provider).await
    }

    /// # Errors
    ///
    /// See [`begin_fetch`](Self::begin_fetch).
    pub async fn retry(&mut self, provider: &dyn QuizProvider) -> Result<(), TransitionError> {
        self.run_fetch(FetchTrigger::Retry, provider).await
    }

    async fn run_fetch(
        &mut self,
        trigger: FetchTrigger,
        provider: &dyn QuizProvider,
    ) -> Result<(), TransitionError> {
        let ticket = self.begin_fetch(trigger)?;
        let outcome = provider.fetch_quiz_item().await;
        self.complete_fetch(ticket, outcome);
        Ok(())
    }
}
