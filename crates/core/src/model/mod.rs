mod course;
mod ids;
mod module;
mod progress;
mod question;

pub use ids::{CourseId, ModuleId, ParseIdError, QuestionId};

pub use course::{Course, CourseDraft};
pub use module::{Module, ModuleDraft};
pub use progress::UserProgress;
pub use question::{MIN_OPTIONS, QuestionDraft, QuestionError, QuizQuestion, ValidatedQuestion};
