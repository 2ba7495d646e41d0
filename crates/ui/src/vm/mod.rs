mod quiz_vm;

pub use quiz_vm::{OptionStatus, OptionVm, QuestionVm, QuizIntent, QuizScreen, screen_for};
