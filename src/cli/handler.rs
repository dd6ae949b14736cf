// Thu Jan 15 2026 - Alex

use super::args::{Args, BatchArgs, Command, ScanArgs};
use crate::automaton::Automaton;
use crate::config::Config;
use crate::output::{ReportFormatter, ScanReport};
use crate::pattern::PatternDatabase;
use crate::scanner::{PayloadScanner, ScanError};
use crate::utils::logging::LoggingUtils;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;

/// Outcome of a command, mapped to the process exit code by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Clean,
    Detected,
}

impl Verdict {
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Clean => 0,
            Verdict::Detected => 2,
        }
    }
}

pub struct CommandHandler {
    formatter: ReportFormatter,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            formatter: ReportFormatter::new(),
        }
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<Verdict> {
        self.setup_logging(&args);

        let config = self.load_config(&args)?;
        let (catalog_name, automaton) = self.load_automaton(&config)?;

        match args.command {
            Command::Scan(scan_args) => self.handle_scan(scan_args, config, &automaton),
            Command::Batch(batch_args) => self.handle_batch(batch_args, config, &automaton),
            Command::Patterns => self.handle_patterns(&catalog_name, &config, &automaton),
        }
    }

    fn setup_logging(&self, args: &Args) {
        if args.no_color {
            colored::control::set_override(false);
        }
        LoggingUtils::init_logger(LoggingUtils::level_from_str(&args.log_level), !args.no_color);
    }

    fn load_config(&self, args: &Args) -> anyhow::Result<Config> {
        let mut config = match &args.config {
            Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(catalog) = &args.catalog {
            config = config.with_catalog(catalog.clone());
        }
        if args.json {
            config = config.with_json_output(true);
        }

        config.validate()?;
        Ok(config)
    }

    fn load_automaton(&self, config: &Config) -> anyhow::Result<(String, Automaton)> {
        let db = match &config.catalog {
            Some(path) => PatternDatabase::load(path).with_context(|| format!("loading catalog {}", path.display()))?,
            None => PatternDatabase::sql_injection(),
        };

        let name = db.name().to_string();
        let patterns = db.into_pattern_set().with_context(|| format!("registering catalog '{}'", name))?;
        let automaton = Automaton::compile(patterns)?;

        log::info!("Catalog '{}' ready: {} signatures, {} nodes", name, automaton.patterns()?.len(), automaton.node_count());
        Ok((name, automaton))
    }

    fn handle_scan(&self, args: ScanArgs, mut config: Config, automaton: &Automaton) -> anyhow::Result<Verdict> {
        let normalize = config.normalize && !args.raw;
        let trace = config.include_trace || args.trace;
        config = config.with_normalize(normalize).with_trace(trace);
        if let Some(severity) = args.min_severity {
            config = config.with_min_severity(severity);
        }

        let scanner = PayloadScanner::from_config(automaton, &config);
        let report = scanner.scan(&args.payload)?;

        if config.json_output {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            let formatter = ReportFormatter::new().with_trace(config.include_trace);
            print!("{}", formatter.format_report(&report));
        }

        Ok(Self::verdict(std::iter::once(&report)))
    }

    fn handle_batch(&self, args: BatchArgs, mut config: Config, automaton: &Automaton) -> anyhow::Result<Verdict> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let normalize = config.normalize && !args.raw;
        config = config.with_normalize(normalize);
        if let Some(severity) = args.min_severity {
            config = config.with_min_severity(severity);
        }
        let threads = args.threads.unwrap_or(config.max_threads);

        let content = fs::read_to_string(&args.input).with_context(|| format!("reading {}", args.input.display()))?;
        let payloads: Vec<&str> = content.lines().filter(|line| !line.trim().is_empty()).collect();
        log::info!("Scanning {} payloads from {} on {} threads", payloads.len(), args.input.display(), threads);

        let progress = if args.no_progress || config.json_output {
            ProgressBar::hidden()
        } else {
            let style = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-");
            ProgressBar::new(payloads.len() as u64).with_style(style)
        };

        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
        let scanner = PayloadScanner::from_config(automaton, &config);
        let results = pool.install(|| scanner.scan_all_with(&payloads, || progress.inc(1)));
        progress.finish_and_clear();

        let mut reports: Vec<ScanReport<'_>> = Vec::with_capacity(results.len());
        for (line, result) in results.into_iter().enumerate() {
            match result {
                Ok(report) => reports.push(report),
                Err(ScanError::PayloadTooLarge { chars, limit }) => {
                    log::warn!("Skipping payload {}: {} characters exceeds limit of {}", line + 1, chars, limit);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let shown: Vec<&ScanReport<'_>> = reports.iter().filter(|r| !args.only_malicious || r.is_malicious()).collect();
        if config.json_output {
            println!("{}", serde_json::to_string_pretty(&shown)?);
        } else {
            for report in &shown {
                println!("{}", self.formatter.format_report(report));
            }
            let detected = reports.iter().filter(|r| r.is_malicious()).count();
            println!("{} of {} payloads matched at least one signature", detected, reports.len());
        }

        Ok(Self::verdict(reports.iter()))
    }

    fn handle_patterns(&self, catalog_name: &str, config: &Config, automaton: &Automaton) -> anyhow::Result<Verdict> {
        let patterns = automaton.patterns()?;

        if config.json_output {
            println!("{}", serde_json::to_string_pretty(patterns)?);
        } else {
            print!("{}", self.formatter.format_pattern_list(catalog_name, patterns));
        }
        Ok(Verdict::Clean)
    }

    fn verdict<'r, 'a: 'r>(mut reports: impl Iterator<Item = &'r ScanReport<'a>>) -> Verdict {
        if reports.any(|r| r.is_malicious()) {
            Verdict::Detected
        } else {
            Verdict::Clean
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_scan_verdicts() {
        let handler = CommandHandler::new();

        let args = Args::try_parse_from(["payload-scanner", "--no-color", "scan", "id=1 or 1=1"]).unwrap();
        assert_eq!(handler.execute(args).unwrap(), Verdict::Detected);

        let args = Args::try_parse_from(["payload-scanner", "--no-color", "scan", "name=john"]).unwrap();
        assert_eq!(handler.execute(args).unwrap(), Verdict::Clean);

        let args = Args::try_parse_from(["payload-scanner", "--no-color", "scan", "--raw", "id=1 or 1=1"]).unwrap();
        assert_eq!(handler.execute(args).unwrap(), Verdict::Clean);
    }

    #[test]
    fn test_batch_with_custom_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog.json");
        fs::write(&catalog, r#"[{"id": 0, "text": "<SCRIPT", "name": "Script tag", "severity": "critical"}]"#).unwrap();

        let input = dir.path().join("payloads.txt");
        let mut file = fs::File::create(&input).unwrap();
        writeln!(file, "q=<script>alert(1)</script>").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "q=hello").unwrap();

        let args = Args::try_parse_from([
            "payload-scanner",
            "--json",
            "--catalog",
            catalog.to_str().unwrap(),
            "batch",
            input.to_str().unwrap(),
            "--threads",
            "2",
        ])
        .unwrap();
        assert_eq!(CommandHandler::new().execute(args).unwrap(), Verdict::Detected);
    }

    #[test]
    fn test_missing_catalog_is_error() {
        let args = Args::try_parse_from(["payload-scanner", "--catalog", "/nonexistent/catalog.json", "patterns"]).unwrap();
        let err = CommandHandler::new().execute(args).unwrap_err();
        assert!(format!("{:#}", err).contains("loading catalog"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Verdict::Clean.exit_code(), 0);
        assert_eq!(Verdict::Detected.exit_code(), 2);
    }
}
