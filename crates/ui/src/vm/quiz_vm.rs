use quiz_core::QuizItem;
use services::{FetchTrigger, Phase, SessionState};

use crate::strings;

/// Everything the user can do from the quiz screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Select(String),
    Next,
    Retry,
}

impl QuizIntent {
    /// The fetch this intent starts, if any.
    #[must_use]
    pub fn fetch_trigger(&self) -> Option<FetchTrigger> {
        match self {
            Self::Start => Some(FetchTrigger::StartGame),
            Self::Next => Some(FetchTrigger::NextQuestion),
            Self::Retry => Some(FetchTrigger::Retry),
            Self::Select(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStatus {
    Selectable,
    Correct,
    WrongSelection,
    Dimmed,
}

impl OptionStatus {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Selectable => "option option--selectable",
            Self::Correct => "option option--correct",
            Self::WrongSelection => "option option--wrong",
            Self::Dimmed => "option option--dimmed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub status: OptionStatus,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub question: String,
    pub image_src: String,
    pub score_label: String,
    pub options: Vec<OptionVm>,
    pub show_next: bool,
}

impl QuestionVm {
    fn new(item: &QuizItem, score: u32, selected: Option<&str>, is_result: bool) -> Self {
        let options = item
            .options()
            .iter()
            .map(|option| OptionVm {
                label: option.clone(),
                status: option_status(item, option, selected, is_result),
                disabled: is_result,
            })
            .collect();

        Self {
            question: item.question().to_string(),
            image_src: item.image().src(),
            score_label: strings::score_label(score),
            options,
            show_next: is_result,
        }
    }
}

fn option_status(
    item: &QuizItem,
    option: &str,
    selected: Option<&str>,
    is_result: bool,
) -> OptionStatus {
    if !is_result {
        return OptionStatus::Selectable;
    }
    if item.is_correct(option) {
        OptionStatus::Correct
    } else if selected == Some(option) {
        OptionStatus::WrongSelection
    } else {
        OptionStatus::Dimmed
    }
}

/// What the quiz screen shows for a given session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Error { message: &'static str },
    Loading,
    Menu,
    Question(QuestionVm),
}

#[must_use]
pub fn screen_for(state: &SessionState) -> QuizScreen {
    if let Some(error) = state.load_error() {
        return QuizScreen::Error {
            message: error.message(),
        };
    }
    if state.is_loading() {
        return QuizScreen::Loading;
    }

    match (state.phase(), state.current_item()) {
        (Phase::Playing, Some(item)) => {
            QuizScreen::Question(QuestionVm::new(item, state.score(), None, false))
        }
        (Phase::ShowingResult, Some(item)) => QuizScreen::Question(QuestionVm::new(
            item,
            state.score(),
            state.selected_answer(),
            true,
        )),
        _ => QuizScreen::Menu,
    }
}
