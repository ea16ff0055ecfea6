use rand::Rng;

use super::error::ExamError;
use super::grading::{Grade, GradeKind, ScoreSource};

/// Attributes shared by every exam.
///
/// Nothing is validated here: an exam with a zero or negative duration can be
/// built and only fails once it is graded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamDetails {
    pub exam_id: String,
    pub subject: String,
    pub duration_minutes: i32,
}

impl ExamDetails {
    pub fn new(
        exam_id: impl Into<String>,
        subject: impl Into<String>,
        duration_minutes: i32,
    ) -> Self {
        Self {
            exam_id: exam_id.into(),
            subject: subject.into(),
            duration_minutes,
        }
    }

    pub fn validate_duration(&self) -> Result<(), ExamError> {
        if self.duration_minutes <= 0 {
            return Err(ExamError::InvalidDuration {
                duration: self.duration_minutes,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleChoiceExam {
    pub details: ExamDetails,
    pub questions: u32,
}

impl MultipleChoiceExam {
    pub fn new(exam_id: &str, subject: &str, duration_minutes: i32, questions: u32) -> Self {
        Self {
            details: ExamDetails::new(exam_id, subject, duration_minutes),
            questions,
        }
    }

    /// Simulated marking: uniform over `0..=questions` correct answers
    fn score<R: Rng + ?Sized>(&self, rng: &mut R) -> Grade {
        Grade {
            score: rng.random_range(0..=self.questions),
            out_of: self.questions,
            kind: GradeKind::MultipleChoice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssayExam {
    pub details: ExamDetails,
    pub topic: String,
}

impl EssayExam {
    pub const MAX_SCORE: u32 = 100;

    pub fn new(exam_id: &str, subject: &str, duration_minutes: i32, topic: &str) -> Self {
        Self {
            details: ExamDetails::new(exam_id, subject, duration_minutes),
            topic: topic.to_string(),
        }
    }

    fn score(&self, scores: &mut dyn ScoreSource) -> Result<Grade, ExamError> {
        let score = scores.essay_score(self)?;
        match u32::try_from(score) {
            Ok(valid) if valid <= Self::MAX_SCORE => Ok(Grade {
                score: valid,
                out_of: Self::MAX_SCORE,
                kind: GradeKind::Essay,
            }),
            _ => Err(ExamError::Grading { score }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exam {
    MultipleChoice(MultipleChoiceExam),
    Essay(EssayExam),
}

impl Exam {
    pub fn details(&self) -> &ExamDetails {
        match self {
            Exam::MultipleChoice(exam) => &exam.details,
            Exam::Essay(exam) => &exam.details,
        }
    }

    /// Validate and score the exam without reporting anything.
    ///
    /// The duration is checked first; when it fails no score is drawn and
    /// the score source is never asked.
    pub fn evaluate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        scores: &mut dyn ScoreSource,
    ) -> Result<Grade, ExamError> {
        self.details().validate_duration()?;

        match self {
            Exam::MultipleChoice(exam) => Ok(exam.score(rng)),
            Exam::Essay(exam) => exam.score(scores),
        }
    }
}

impl From<MultipleChoiceExam> for Exam {
    fn from(exam: MultipleChoiceExam) -> Self {
        Exam::MultipleChoice(exam)
    }
}

impl From<EssayExam> for Exam {
    fn from(exam: EssayExam) -> Self {
        Exam::Essay(exam)
    }
}

/// The fixed pair of exams the `exam` command walks through
pub fn demonstration_exams() -> [Exam; 2] {
    [
        MultipleChoiceExam::new("MC101", "Mathematics", 60, 20).into(),
        EssayExam::new("EE101", "Literature", 90, "Quantum Computing Term Paper").into(),
    ]
}
