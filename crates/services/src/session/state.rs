use quiz_core::QuizItem;

/// User-facing text for every failed fetch.
pub const LOAD_ERROR_MESSAGE: &str = "حدث خطأ أثناء جلب السؤال. يرجى المحاولة مرة أخرى.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    ShowingResult,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadErrorKind {
    EmptyResponse,
    MalformedResponse,
    ImageGenerationFailed,
    Transport,
}

/// Why the last fetch failed. Every kind renders the same localized message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadError {
    kind: LoadErrorKind,
}

impl LoadError {
    #[must_use]
    pub fn new(kind: LoadErrorKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub fn kind(&self) -> LoadErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        LOAD_ERROR_MESSAGE
    }
}

/// Snapshot of a quiz session, written only by `SessionController`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub(super) phase: Phase,
    pub(super) current_item: Option<QuizItem>,
    pub(super) score: u32,
    pub(super) selected_answer: Option<String>,
    pub(super) load_error: Option<LoadError>,
    pub(super) is_loading: bool,
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&QuizItem> {
        self.current_item.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}
