//! Gridsheet - Command-line tool for packing PNG directories into spritesheets

use std::process::ExitCode;

use gridsheet::cli;

fn main() -> ExitCode {
    cli::run()
}
