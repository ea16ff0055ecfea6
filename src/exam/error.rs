/// Failures that can stop an exam from being graded.
///
/// None of these leave [`Grader::grade_exam`]: they are reported there as a
/// printed message. A score that could not be read at all counts as a failed
/// grading, the same as one outside the allowed range.
///
/// [`Grader::grade_exam`]: super::Grader::grade_exam
#[derive(Debug, thiserror::Error)]
pub enum ExamError {
    #[error("Invalid exam duration!")]
    InvalidDuration { duration: i32 },

    #[error("Grading process failed!")]
    Grading { score: i64 },

    #[error("Grading process failed!")]
    Input(#[from] ScoreInputError),
}

/// Failure to obtain an essay score from the grader.
#[derive(Debug, thiserror::Error)]
pub enum ScoreInputError {
    #[error("failed to read essay score: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{0}' is not a whole-number score")]
    NotANumber(String),

    #[error("no essay score entered (input closed)")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ExamError::InvalidDuration { duration: -5 }.to_string(),
            "Invalid exam duration!"
        );
        assert_eq!(
            ExamError::Grading { score: 150 }.to_string(),
            "Grading process failed!"
        );
    }

    #[test]
    fn test_input_error_reads_as_grading_failure() {
        let err = ExamError::from(ScoreInputError::NotANumber("abc".to_string()));
        assert_eq!(err.to_string(), "Grading process failed!");

        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("'abc' is not a whole-number score"));
    }
}
