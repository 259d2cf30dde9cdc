extern crate extended_mst;

use extended_mst::{parse_description, solve, write_report};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let input = match read_description() {
        Ok(input) => input,
        Err(error) => {
            eprintln!("ERROR: Could not read input description: {error}");
            return ExitCode::FAILURE;
        }
    };

    let description = match parse_description(&input) {
        Ok(description) => description,
        Err(error) => {
            eprintln!("ERROR: Malformed graph description: {error}");
            return ExitCode::FAILURE;
        }
    };

    let solution = solve(&description);

    let mut stdout = io::stdout().lock();
    if let Err(error) = write_report(&solution, &mut stdout) {
        eprintln!("ERROR: Could not write report: {error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Reads the description from the file named by the first argument, or from
/// stdin when no argument is given.
fn read_description() -> io::Result<String> {
    match env::args().nth(1) {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
