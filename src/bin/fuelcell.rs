//! Writes the fuel cell industry deck into the current directory.

use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let deck = deckforge::deck::fuelcell::deck();
    match deck.write_to(Path::new(".")) {
        Ok(path) => {
            println!("{} ({} slides)", path.display(), deck.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
