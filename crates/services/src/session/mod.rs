mod controller;
mod state;

pub use controller::{AnswerOutcome, FetchTicket, FetchTrigger, SessionController};
pub use state::{LOAD_ERROR_MESSAGE, LoadError, LoadErrorKind, Phase, SessionState};
