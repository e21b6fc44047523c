//! This is the command line tool that reads digits from the user and reports
//! a big/small prediction for the next digit after every entry.

extern crate clap;
extern crate env_logger;
extern crate log;

use bigsmall::model::{PatternModel, DEFAULT_WINDOW, PATTERN_CTX};
use bigsmall::Outcome;
use clap::{value_parser, Arg, Command};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};

type ModelTy = PatternModel<PATTERN_CTX>;

/// Print the state of the predictor after recording 'digit'.
fn report(digit: u8, history: &[u8], outcome: Outcome, confidence: f64) {
    println!();
    println!("Added: {} ({})", digit, Outcome::from_digit(digit));
    println!("Current history: {:?}", history);
    println!(
        "Next prediction: {} (confidence: {:.1}%)",
        outcome,
        confidence * 100.0
    );
    println!("{}", "-".repeat(40));
}

fn main() {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("window")
                .short('w')
                .long("window")
                .value_name("DIGITS")
                .help("Number of recent digits kept in the history window")
                .value_parser(value_parser!(u64).range(1..))
                .num_args(1),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Seed for the fallback coin flip, for reproducible runs")
                .value_parser(value_parser!(u64))
                .num_args(1),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let window = matches
        .get_one::<u64>("window")
        .copied()
        .unwrap_or(DEFAULT_WINDOW as u64) as usize;
    if window <= PATTERN_CTX {
        log::warn!(
            "A window of {} can't hold a {}-digit pattern plus an outcome; \
             predictions will stay random",
            window,
            PATTERN_CTX
        );
    }

    let mut rng = match matches.get_one::<u64>("seed") {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };
    let mut model = ModelTy::with_window(window);
    log::info!(
        "Tracking {}-digit patterns over a window of {} digits.",
        PATTERN_CTX,
        window
    );

    println!("Big/Small Predictor");
    println!("-------------------");
    println!("Enter numbers between 0-9 (or 'q' to quit, 'r' to reset)");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter a number (0-9): ");
        io::stdout().flush().expect("Can't flush stdout");

        line.clear();
        let read = stdin.read_line(&mut line).expect("Can't read from stdin");
        if read == 0 {
            // The input stream ended.
            break;
        }

        let input = line.trim().to_lowercase();
        if input == "q" {
            break;
        }
        if input == "r" {
            model.reset();
            println!("Predictor has been reset.");
            continue;
        }

        let digit = match input.parse::<u8>() {
            Ok(digit) => digit,
            Err(_) => {
                println!("Invalid input. Please enter a number 0-9 or 'q'/'r'.");
                continue;
            }
        };
        if let Err(err) = model.update(digit) {
            println!("{}", err);
            continue;
        }

        let history = model.get_history();
        let (outcome, confidence) = model.predict(&mut rng);
        log::debug!("Recorded {}.", digit);
        report(digit, &history, outcome, confidence);
    }
}
