// Thu Jan 15 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{Args, BatchArgs, Command, ScanArgs};
pub use handler::{CommandHandler, Verdict};

use clap::Parser;

pub fn parse_args() -> Args {
    Args::parse()
}

pub fn run() -> anyhow::Result<Verdict> {
    let args = parse_args();
    let handler = CommandHandler::new();
    handler.execute(args)
}
