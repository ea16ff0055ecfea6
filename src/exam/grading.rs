use std::io::Write;

use anyhow::{Context, Result};
use rand::rngs::StdRng;

use super::error::ScoreInputError;
use super::types::{demonstration_exams, EssayExam, Exam};
use crate::output::{format_exam_details, format_grade, format_grading_error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeKind {
    MultipleChoice,
    Essay,
}

/// A successfully graded exam: `score` out of `out_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    pub score: u32,
    pub out_of: u32,
    pub kind: GradeKind,
}

/// Where essay scores come from. Essays are marked by a person, so the
/// score is asked for only once the exam has passed validation.
pub trait ScoreSource {
    fn essay_score(&mut self, exam: &EssayExam) -> Result<i64, ScoreInputError>;
}

/// Hands out the same score for every essay
#[derive(Debug, Clone, Copy)]
pub struct FixedScore(pub i64);

impl ScoreSource for FixedScore {
    fn essay_score(&mut self, _exam: &EssayExam) -> Result<i64, ScoreInputError> {
        Ok(self.0)
    }
}

/// Grades exams and reports the outcome.
///
/// Owns the random source for multiple-choice marking. It is seeded once
/// when the grader is built and reused for every exam after that.
pub struct Grader {
    rng: StdRng,
    scores: Box<dyn ScoreSource>,
    use_colors: bool,
}

impl Grader {
    pub fn new(rng: StdRng, scores: Box<dyn ScoreSource>) -> Self {
        Self {
            rng,
            scores,
            use_colors: false,
        }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Grade an exam and write the result (or the reason it failed) to `out`.
    ///
    /// Grading failures (invalid duration, a score out of range or one that
    /// could not be read) are reported here and never returned as errors; the
    /// caller gets `Ok(None)` for them. Only a failure to write to `out` comes
    /// back as `Err`.
    pub fn grade_exam(&mut self, exam: &Exam, out: &mut dyn Write) -> Result<Option<Grade>> {
        let exam_id = &exam.details().exam_id;

        match exam.evaluate(&mut self.rng, self.scores.as_mut()) {
            Ok(grade) => {
                tracing::debug!(
                    exam_id = %exam_id,
                    score = grade.score,
                    out_of = grade.out_of,
                    "exam graded"
                );
                writeln!(out, "{}", format_grade(&grade, self.use_colors))
                    .context("Failed to write grade report")?;
                Ok(Some(grade))
            }
            Err(e) => {
                tracing::info!(exam_id = %exam_id, error = ?e, "grading rejected");
                writeln!(out, "{}", format_grading_error(&e, self.use_colors))
                    .context("Failed to write grading error")?;
                Ok(None)
            }
        }
    }
}

/// Walk through the demonstration exams: print each exam's details, then
/// grade it. Returns one entry per exam, `None` where grading was rejected.
pub fn run_demonstration(grader: &mut Grader, out: &mut dyn Write) -> Result<Vec<Option<Grade>>> {
    let mut grades = Vec::new();

    for (i, exam) in demonstration_exams().iter().enumerate() {
        if i > 0 {
            writeln!(out).context("Failed to write output")?;
        }
        writeln!(out, "{}", format_exam_details(exam.details(), grader.use_colors))
            .context("Failed to write exam details")?;
        grades.push(grader.grade_exam(exam, out)?);
    }

    Ok(grades)
}
