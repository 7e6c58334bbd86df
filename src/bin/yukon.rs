//! Terminal Yukon. Optional first argument: a deal seed.

use std::io;
use std::process::ExitCode;

use rust_yukon::{GameConfig, GameSession};

fn main() -> ExitCode {
    let mut config = GameConfig::new();
    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse() {
            Ok(seed) => config = config.with_seed(seed),
            Err(_) => {
                eprintln!("usage: yukon [seed]");
                return ExitCode::FAILURE;
            }
        }
    }

    let mut session = match GameSession::new(config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("could not set up game: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(seed) = session.seed() {
        println!("Seed: {seed}");
    }

    let stdin = io::stdin();
    match session.run(stdin.lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("i/o error: {err}");
            ExitCode::FAILURE
        }
    }
}
