use std::io::{BufRead, StdinLock, Stdout, Write};

use anyhow::{Context, Result};

use crate::exam::{EssayExam, ScoreInputError, ScoreSource};
use crate::fleet::VehicleKind;

pub const DAYS_PROMPT: &str = "Please enter the number of days you want to rent the vehicle: ";
pub const ESSAY_SCORE_PROMPT: &str = "Enter score for the Essay Exam (0-100): ";

/// Standard input ran out while a value was still expected.
#[derive(Debug, thiserror::Error)]
#[error("input closed before a value was entered")]
pub struct InputClosed;

/// Line-oriented prompts over any reader/writer pair.
///
/// The binary wires this to stdin/stdout; tests drive it with a `Cursor`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one trimmed line. `None` means end of input.
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Write a message without a newline and return the user's trimmed answer.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush stdout")?;
        match self.read_line().context("Failed to read input")? {
            Some(line) => Ok(line),
            None => Err(InputClosed.into()),
        }
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message).context("Failed to write output")
    }

    /// Keep asking until the user types a menu number that names a vehicle.
    /// Rejected input is echoed back before asking again.
    pub fn select_vehicle(&mut self) -> Result<VehicleKind> {
        loop {
            let input = self.prompt("")?;
            match input.parse::<VehicleKind>() {
                Ok(kind) => {
                    tracing::debug!(vehicle = kind.label(), "vehicle selected");
                    return Ok(kind);
                }
                Err(e) => {
                    tracing::debug!(input = %input, "vehicle selector rejected");
                    self.say(&format!("{}\n", e))?;
                }
            }
        }
    }

    /// Ask for the rental length. Any whole number is accepted, including
    /// zero and negatives.
    pub fn read_days(&mut self) -> Result<i64> {
        loop {
            let input = self.prompt(DAYS_PROMPT)?;
            match input.parse::<i64>() {
                Ok(days) => return Ok(days),
                Err(_) => self.say(&format!("{} is not a whole number of days.", input))?,
            }
        }
    }
}

impl<R: BufRead, W: Write> ScoreSource for Console<R, W> {
    fn essay_score(&mut self, _exam: &EssayExam) -> Result<i64, ScoreInputError> {
        write!(self.output, "{}", ESSAY_SCORE_PROMPT)?;
        self.output.flush()?;

        let line = self.read_line()?.ok_or(ScoreInputError::Closed)?;
        line.parse::<i64>().map_err(|_| ScoreInputError::NotANumber(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output).unwrap()
    }

    fn essay() -> EssayExam {
        EssayExam::new("EE101", "Literature", 90, "Topic")
    }

    #[test]
    fn test_select_vehicle_first_try() {
        let mut c = console("2\n");
        assert_eq!(c.select_vehicle().unwrap(), VehicleKind::Suv);
        assert!(!written(c).contains("not recognized"));
    }

    #[test]
    fn test_select_vehicle_reprompts_on_unknown() {
        let mut c = console("99\nabc\n3\n");
        assert_eq!(c.select_vehicle().unwrap(), VehicleKind::Truck);

        let output = written(c);
        assert!(output.contains("99 not recognized. Please follow the instructions above."));
        assert!(output.contains("abc not recognized."));
    }

    #[test]
    fn test_select_vehicle_input_closed() {
        let mut c = console("99\n");
        let err = c.select_vehicle().unwrap_err();
        assert!(err.is::<InputClosed>());
    }

    #[test]
    fn test_read_days() {
        let mut c = console("3\n");
        assert_eq!(c.read_days().unwrap(), 3);
        assert_eq!(written(c), DAYS_PROMPT);
    }

    #[test]
    fn test_read_days_accepts_zero_and_negative() {
        assert_eq!(console("0\n").read_days().unwrap(), 0);
        assert_eq!(console("-4\n").read_days().unwrap(), -4);
    }

    #[test]
    fn test_read_days_reprompts_on_garbage() {
        let mut c = console("three\n 7 \n");
        assert_eq!(c.read_days().unwrap(), 7);
        assert!(written(c).contains("three is not a whole number of days."));
    }

    #[test]
    fn test_essay_score_from_console() {
        let mut c = console("75\n");
        assert_eq!(c.essay_score(&essay()).unwrap(), 75);
        assert_eq!(written(c), ESSAY_SCORE_PROMPT);
    }

    #[test]
    fn test_essay_score_out_of_range_passes_through() {
        let mut c = console("150\n");
        assert_eq!(c.essay_score(&essay()).unwrap(), 150);
    }

    #[test]
    fn test_essay_score_not_a_number() {
        let mut c = console("great\n");
        assert!(matches!(
            c.essay_score(&essay()),
            Err(ScoreInputError::NotANumber(s)) if s == "great"
        ));
    }

    #[test]
    fn test_essay_score_closed() {
        let mut c = console("");
        assert!(matches!(c.essay_score(&essay()), Err(ScoreInputError::Closed)));
    }
}
