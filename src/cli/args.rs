// Thu Jan 15 2026 - Alex

use crate::pattern::Severity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "payload-scanner")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Single-pass multi-signature payload scanner", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// JSON scanner config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON signature catalog, overrides the config
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(long, global = true)]
    pub json: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a single payload
    Scan(ScanArgs),
    /// Scan a file with one payload per line
    Batch(BatchArgs),
    /// List the active signature catalog
    Patterns,
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    pub payload: String,

    /// Match the payload as given, without normalization
    #[arg(long)]
    pub raw: bool,

    /// Include the visited-node trace
    #[arg(long)]
    pub trace: bool,

    #[arg(long)]
    pub min_severity: Option<Severity>,
}

#[derive(Parser, Debug)]
pub struct BatchArgs {
    pub input: PathBuf,

    #[arg(long)]
    pub raw: bool,

    #[arg(long)]
    pub min_severity: Option<Severity>,

    #[arg(long)]
    pub threads: Option<usize>,

    /// Only print payloads with detections
    #[arg(long)]
    pub only_malicious: bool,

    #[arg(long)]
    pub no_progress: bool,
}

impl BatchArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.threads == Some(0) {
            return Err("threads must be greater than 0".to_string());
        }
        Ok(())
    }
}
