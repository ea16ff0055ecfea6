use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::exam::{ExamDetails, ExamError, Grade, GradeKind};
use crate::fleet::{RentalQuote, VehicleKind};

pub const WELCOME_BANNER: &str =
    "Welcome to Zetech Rental Information Management System (Zetech RIMS).";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a cost with two decimal places (630 -> "630.00")
pub fn format_cost(cost: f64) -> String {
    format!("{:.2}", cost)
}

/// Vehicle menu shown before the selector prompt
pub fn format_vehicle_menu() -> String {
    let options = VehicleKind::ALL
        .iter()
        .map(|kind| format!("Type {} for: \"{}\"", kind.selector(), kind.label()))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Which type of Vehicle would you like to Rent?\n\n{}", options)
}

/// Format a rental quote as the two-line cost report
/// Format: "{vehicle} Chosen! \nTotal Rental Cost: KES{cost} for {days} days."
pub fn format_rental_quote(quote: &RentalQuote, use_colors: bool) -> String {
    let cost = format!("{}{}", quote.currency, format_cost(quote.total_cost));

    if use_colors {
        format!(
            "{} Chosen! \nTotal Rental Cost: {} for {} days.",
            quote.vehicle.bold(),
            cost.green(),
            quote.days
        )
    } else {
        format!(
            "{} Chosen! \nTotal Rental Cost: {} for {} days.",
            quote.vehicle, cost, quote.days
        )
    }
}

/// Format a rental quote as pretty JSON for scripting
pub fn format_quote_json(quote: &RentalQuote) -> Result<String> {
    serde_json::to_string_pretty(quote).context("Failed to serialize rental quote")
}

pub fn format_exam_details(details: &ExamDetails, use_colors: bool) -> String {
    if use_colors {
        format!(
            "Exam ID: {}\nSubject: {}\nDuration: {} minutes",
            details.exam_id.bold(),
            details.subject.cyan(),
            details.duration_minutes
        )
    } else {
        format!(
            "Exam ID: {}\nSubject: {}\nDuration: {} minutes",
            details.exam_id, details.subject, details.duration_minutes
        )
    }
}

pub fn format_grade(grade: &Grade, use_colors: bool) -> String {
    let (heading, suffix) = match grade.kind {
        GradeKind::MultipleChoice => ("Grading Multiple Choice Exam...", " correct answers"),
        GradeKind::Essay => ("Grading Essay Exam...", ""),
    };
    let score = format!("{}/{}", grade.score, grade.out_of);

    if use_colors {
        format!("{}\nScore: {}{}", heading.dimmed(), score.bold(), suffix)
    } else {
        format!("{}\nScore: {}{}", heading, score, suffix)
    }
}

pub fn format_grading_error(err: &ExamError, use_colors: bool) -> String {
    let message = format!("Error: {}", err);
    if use_colors {
        message.red().to_string()
    } else {
        message
    }
}
