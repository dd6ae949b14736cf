// Tue Jan 13 2026 - Alex

use colored::Colorize;
use payload_scanner::cli;

fn main() {
    match cli::run() {
        Ok(verdict) => std::process::exit(verdict.exit_code()),
        Err(e) => {
            eprintln!("{} {:#}", "[!]".red(), e);
            std::process::exit(1);
        }
    }
}
