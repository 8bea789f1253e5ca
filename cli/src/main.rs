//! pagecomp CLI: driving adapter for the page-equivalence engine.
//!
//! Subcommands:
//! - `eq <config> <a> <b> [--trace]`: decide whether two request targets are one page
//! - `check <config>`: validate a config and list its rules
//! - `group <config> [--input FILE]`: group request targets (one per line) into pages

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagecomp::{Comparator, ComparatorConfig, Page};
use pagecomp_http::page_from_target;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

/// Exit code of `eq` when the pages differ.
const EXIT_DIFFERENT: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "pagecomp", version, about = "Decide whether requests address the same page")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare two request targets (`/path?query`); exits 2 when they differ
    Eq {
        /// Rule config (JSON when the extension is `.json`, YAML otherwise)
        config: PathBuf,
        /// First request target
        a: String,
        /// Second request target
        b: String,
        /// Print every rule evaluated
        #[arg(long)]
        trace: bool,
    },
    /// Compile every rule in a config and list them
    Check {
        /// Rule config
        config: PathBuf,
    },
    /// Group request targets read one per line
    Group {
        /// Rule config
        config: PathBuf,
        /// Read targets from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = initialize_logging(&cli) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else if cli.quiet {
        LevelFilter::ERROR
    } else {
        LevelFilter::WARN
    };

    // RUST_LOG wins over the flags when set.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Eq { config, a, b, trace } => cmd_eq(&config, &a, &b, trace),
        Command::Check { config } => cmd_check(&config).map(|()| ExitCode::SUCCESS),
        Command::Group { config, input } => {
            cmd_group(&config, input.as_deref()).map(|()| ExitCode::SUCCESS)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_eq(config: &Path, a: &str, b: &str, trace: bool) -> Result<ExitCode> {
    let comparator = load_comparator(config)?;
    let (a, b) = (page_from_target(a), page_from_target(b));

    let equal = if trace {
        let trace = comparator.equal_with_trace(&a, &b);
        println!("{}", trace.to_string().trim_end());
        trace.result
    } else {
        let equal = comparator.equal(&a, &b);
        println!("{}", if equal { "equal" } else { "different" });
        equal
    };

    Ok(if equal {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_DIFFERENT)
    })
}

fn cmd_check(config: &Path) -> Result<()> {
    let comparator = load_comparator(config)?;

    if comparator.is_empty() {
        println!("Config valid: no rules (structural equality)");
        return Ok(());
    }

    println!("Config valid: {} rule(s)", comparator.len());
    for (index, rule) in comparator.rules().iter().enumerate() {
        println!("  #{index} {rule}");
    }
    Ok(())
}

fn cmd_group(config: &Path, input: Option<&Path>) -> Result<()> {
    let comparator = load_comparator(config)?;

    let targets = match input {
        Some(path) => {
            let file = fs::File::open(path)
                .with_context(|| format!("failed to open \"{}\"", path.display()))?;
            read_targets(BufReader::new(file))?
        }
        None => read_targets(io::stdin().lock())?,
    };

    let groups = group_targets(&comparator, &targets);
    tracing::debug!(targets = targets.len(), groups = groups.len(), "grouped");

    for (index, group) in groups.iter().enumerate() {
        println!("group {} ({})", index + 1, group.len());
        for target in group {
            println!("  {target}");
        }
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Grouping
// ═══════════════════════════════════════════════════════════════════════════════

/// Read one request target per line, skipping blank lines.
fn read_targets(reader: impl BufRead) -> Result<Vec<String>> {
    let mut targets = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read input")?;
        let target = line.trim();
        if !target.is_empty() {
            targets.push(target.to_owned());
        }
    }
    Ok(targets)
}

/// Group targets by page, keeping input order within and across groups.
///
/// Each target joins the first group whose first member is the same page.
fn group_targets<'t>(comparator: &Comparator, targets: &'t [String]) -> Vec<Vec<&'t str>> {
    let mut groups: Vec<(Page, Vec<&'t str>)> = Vec::new();

    for target in targets {
        let page = page_from_target(target);
        match groups
            .iter()
            .position(|(first, _)| comparator.equal(first, &page))
        {
            Some(i) => groups[i].1.push(target.as_str()),
            None => groups.push((page, vec![target.as_str()])),
        }
    }

    groups.into_iter().map(|(_, members)| members).collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Config loading
// ═══════════════════════════════════════════════════════════════════════════════

fn load_comparator(path: &Path) -> Result<Comparator> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read \"{}\"", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = parse_config(&content, is_json)
        .with_context(|| format!("failed to parse \"{}\"", path.display()))?;

    Comparator::from_config(&config)
        .with_context(|| format!("invalid config \"{}\"", path.display()))
}

fn parse_config(content: &str, is_json: bool) -> Result<ComparatorConfig> {
    if is_json {
        serde_json::from_str(content).context("JSON parse error")
    } else {
        // Default to YAML (handles .yaml and .yml)
        serde_yaml::from_str(content).context("YAML parse error")
    }
}
