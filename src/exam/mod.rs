pub mod error;
pub mod grading;
pub mod types;

pub use error::{ExamError, ScoreInputError};
pub use grading::{run_demonstration, FixedScore, Grade, GradeKind, Grader, ScoreSource};
pub use types::{demonstration_exams, EssayExam, Exam, ExamDetails, MultipleChoiceExam};
