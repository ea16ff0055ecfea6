use std::io::Write;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use zetech_rims::console::{Console, InputClosed};
use zetech_rims::exam::{run_demonstration, FixedScore, Grader, ScoreSource};
use zetech_rims::fleet::{run_rental, Fleet, RentalRequest, VehicleKind};
use zetech_rims::output;

const EXIT_SUCCESS: i32 = 0;
const EXIT_UNEXPECTED: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_USAGE: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a vehicle rental (prompts for anything not given as a flag)
    Fleet {
        /// Vehicle menu number: 1 = Car, 2 = SUV, 3 = Truck
        #[arg(long)]
        vehicle: Option<String>,

        /// Number of rental days
        #[arg(long, allow_negative_numbers = true)]
        days: Option<i64>,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the exam grading demonstration
    Exam {
        /// Essay score to use instead of prompting for one
        #[arg(long, allow_negative_numbers = true)]
        essay_score: Option<i64>,

        /// Seed for multiple-choice marking (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "zetech")]
#[command(about = "Zetech rental pricing and exam grading", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    zetech_rims::logging::init(cli.verbose);

    let use_colors = !cli.no_color && output::should_use_colors();

    let code = match cli.command {
        Commands::Fleet {
            vehicle,
            days,
            json,
        } => run_fleet(vehicle, days, json, use_colors),
        Commands::Exam { essay_score, seed } => run_exam(essay_score, seed, use_colors),
    };

    std::process::exit(code);
}

fn run_fleet(vehicle: Option<String>, days: Option<i64>, json: bool, use_colors: bool) -> i32 {
    // No one to re-prompt when the choice came from a flag
    let kind = match vehicle.map(|raw| raw.parse::<VehicleKind>()).transpose() {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("Invalid --vehicle: {}", e);
            return EXIT_USAGE;
        }
    };

    let request = RentalRequest {
        vehicle: kind,
        days,
        json,
    };
    let mut console = Console::stdio();

    match run_rental(&mut console, &Fleet::new(), request, use_colors) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) if e.is::<InputClosed>() => {
            eprintln!("Input error: {}", e);
            EXIT_INPUT
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_UNEXPECTED
        }
    }
}

fn run_exam(essay_score: Option<i64>, seed: Option<u64>, use_colors: bool) -> i32 {
    // Seeded once for the whole run
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let scores: Box<dyn ScoreSource> = match essay_score {
        Some(score) => Box::new(FixedScore(score)),
        None => Box::new(Console::stdio()),
    };
    let mut grader = Grader::new(rng, scores).with_colors(use_colors);

    let mut stdout = std::io::stdout();
    let result = run_demonstration(&mut grader, &mut stdout)
        .and_then(|_| stdout.flush().context("Failed to flush stdout"));

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            println!("An error occurred: {:#}", e);
            EXIT_UNEXPECTED
        }
    }
}
