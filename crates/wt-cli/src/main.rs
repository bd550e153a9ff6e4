//! CLI entry point for the wordtally word counter.
//!
//! # Usage
//!
//! ```bash
//! wordtally [OPTIONS] <COMMAND>
//!
//! # Rank the 20 most frequent words in a directory of notes
//! wordtally count notes/ --top 20
//!
//! # Count words piped on stdin, ignoring punctuation
//! cat book.txt | wordtally count --strip-symbols
//!
//! # Total words per file
//! wordtally words chapter1.txt chapter2.txt
//!
//! # Write a CSV report
//! wordtally report notes/ --format csv --output words.csv
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::{self, Read, Write};

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{WrapErr, eyre};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wt_core::{Config, TextFilter};
use wt_counter::{
    CountError, CountResult, RankedWord, StatsSnapshot, WordCounter, count_words, write_ranked,
};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Count and rank words in text files.
///
/// Words are maximal runs of non-whitespace characters. Directories are
/// walked recursively, honouring `.gitignore`.
#[derive(Parser)]
#[command(name = "wordtally", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file.
    #[arg(short, long, global = true, env = "WORDTALLY_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Options shared by the counting subcommands.
#[derive(clap::Args)]
struct CountArgs {
    /// Files or directories to count. Reads stdin when omitted.
    paths: Vec<Utf8PathBuf>,

    /// Remove everything but letters, digits, and whitespace before counting.
    #[arg(long)]
    strip_symbols: bool,

    /// Maximum number of files counted in parallel.
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Number of ranked words to show (0 shows all).
    #[arg(short = 'n', long)]
    top: Option<usize>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Rank words by frequency.
    Count {
        #[command(flatten)]
        args: CountArgs,

        /// Skip the summary printed after the ranking.
        #[arg(long)]
        no_summary: bool,
    },

    /// Print the number of words in each file.
    Words {
        /// Files or directories to count. Reads stdin when omitted.
        paths: Vec<Utf8PathBuf>,
    },

    /// Generate a ranked word report.
    Report {
        #[command(flatten)]
        args: CountArgs,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Json)]
        format: ReportFormat,

        /// Output file (defaults to stdout).
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
    },
}

/// Report output format.
#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    /// JSON format.
    Json,
    /// CSV format.
    Csv,
    /// Tab-separated ranking.
    Text,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `warn` level by default. Logs go to
/// stderr so they never mix with the ranking on stdout.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(format!("{level},ignore=warn,globset=warn"))
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides.
fn build_config(cli: &Cli, args: Option<&CountArgs>) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .wrap_err_with(|| format!("Failed to load configuration from {path}"))?,
        None => Config::default(),
    };

    if let Some(args) = args {
        if args.strip_symbols {
            config.count.filter = TextFilter::StripSymbols;
        }
        if args.jobs.is_some() {
            config.count.max_parallel_jobs = args.jobs;
        }
        if let Some(top) = args.top {
            config.display.top = top;
        }
    }

    config.validate()?;
    debug!(
        line_ending = config.count.line_ending.label(),
        top = config.display.top,
        ?config,
        "Configuration resolved"
    );
    Ok(config)
}

/// Counts the given paths, or stdin when there are none.
fn count_input(counter: &WordCounter, paths: &[Utf8PathBuf]) -> color_eyre::Result<CountResult> {
    if paths.is_empty() {
        info!("Reading from stdin");
        let stdin = io::stdin();
        return counter
            .count_reader(stdin.lock())
            .wrap_err("Failed to read stdin");
    }

    Ok(counter.count_paths(paths)?)
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Ranks words and prints them, followed by a summary.
fn run_count(config: &Config, args: &CountArgs, no_summary: bool) -> color_eyre::Result<()> {
    let counter = WordCounter::from_config(config);
    let result = count_input(&counter, &args.paths)?;
    let ranked = result.ranked(config.display.top);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_ranked(&mut handle, &ranked)?;

    if !no_summary {
        print_summary(&mut handle, &result.stats, result.unique())?;
    }

    Ok(())
}

/// Writes the fast word count of each input file.
///
/// Directories are expanded the same way `count` expands them. A `total`
/// line follows when more than one file was counted.
fn run_words<W: Write>(
    config: &Config,
    paths: &[Utf8PathBuf],
    out: &mut W,
) -> color_eyre::Result<()> {
    if paths.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .wrap_err("Failed to read stdin")?;
        writeln!(out, "{}", count_words(&text))?;
        return Ok(());
    }

    let files = WordCounter::from_config(config).collect_files(paths)?;

    let mut total = 0;
    for file in &files {
        let text = std::fs::read_to_string(file)
            .map_err(|e| CountError::read(file.as_path(), e))?;
        let words = count_words(&text);
        total += words;
        writeln!(out, "{words}\t{file}")?;
    }

    if files.len() > 1 {
        writeln!(out, "{total}\ttotal")?;
    }

    Ok(())
}

/// Generates a ranked report in the specified format.
fn run_report(
    config: &Config,
    args: &CountArgs,
    format: ReportFormat,
    output: Option<&Utf8PathBuf>,
) -> color_eyre::Result<()> {
    let counter = WordCounter::from_config(config);
    let result = count_input(&counter, &args.paths)?;
    let ranked = result.ranked(config.display.top);

    let content = match format {
        ReportFormat::Json => generate_json_report(&result.stats, result.unique(), &ranked)?,
        ReportFormat::Csv => generate_csv_report(&ranked),
        ReportFormat::Text => {
            let mut buf = Vec::new();
            write_ranked(&mut buf, &ranked)?;
            String::from_utf8(buf)?
        }
    };

    if let Some(output_path) = output {
        std::fs::write(output_path, &content)
            .wrap_err_with(|| format!("Failed to write report to {output_path}"))?;
        info!(path = %output_path, words = ranked.len(), "Report written");
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{content}")?;
    }

    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Prints a summary of count statistics.
fn print_summary<W: Write>(out: &mut W, stats: &StatsSnapshot, unique: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Files:        {}", stats.files)?;
    writeln!(out, "Lines:        {} ({} blank)", stats.lines, stats.blank_lines)?;
    writeln!(out, "Words:        {}", stats.tokens)?;
    writeln!(out, "Unique words: {unique}")?;
    writeln!(out, "Words/line:   {:.1}", stats.tokens_per_line())
}

/// Generates a JSON report.
fn generate_json_report(
    stats: &StatsSnapshot,
    unique: usize,
    words: &[RankedWord<'_>],
) -> color_eyre::Result<String> {
    #[derive(serde::Serialize)]
    struct Report<'a> {
        stats: &'a StatsSnapshot,
        unique: usize,
        words: &'a [RankedWord<'a>],
    }

    let report = Report {
        stats,
        unique,
        words,
    };
    serde_json::to_string_pretty(&report).map_err(|e| eyre!("Failed to serialize JSON: {}", e))
}

/// Generates a CSV report.
fn generate_csv_report(words: &[RankedWord<'_>]) -> String {
    use std::fmt::Write;

    let mut output = String::from("rank,word,count\n");
    for entry in words {
        let word = escape_csv(entry.word);
        let _ = writeln!(output, "{},{word},{}", entry.rank, entry.count);
    }
    output
}

/// Escapes a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_owned()
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Route to appropriate command
    match &cli.command {
        Commands::Count { args, no_summary } => {
            let config = build_config(&cli, Some(args))?;
            run_count(&config, args, *no_summary)
        }
        Commands::Words { paths } => {
            let config = build_config(&cli, None)?;
            let stdout = io::stdout();
            run_words(&config, paths, &mut stdout.lock())
        }
        Commands::Report {
            args,
            format,
            output,
        } => {
            let config = build_config(&cli, Some(args))?;
            run_report(&config, args, *format, output.as_ref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use wt_core::ConfigError;

    fn utf8_dir(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_owned()).unwrap()
    }

    fn write_config(root: &Utf8PathBuf, json: &str) -> Utf8PathBuf {
        let path = root.join("wordtally.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    fn count_args(cli: &Cli) -> &CountArgs {
        match &cli.command {
            Commands::Count { args, .. } | Commands::Report { args, .. } => args,
            Commands::Words { .. } => unreachable!("expected a counting command"),
        }
    }

    fn words_output(config: &Config, paths: &[Utf8PathBuf]) -> color_eyre::Result<String> {
        let mut out = Vec::new();
        run_words(config, paths, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn ranked() -> Vec<RankedWord<'static>> {
        vec![
            RankedWord {
                rank: 1,
                word: "the",
                count: 3,
            },
            RankedWord {
                rank: 2,
                word: "a,b",
                count: 1,
            },
        ]
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_count_command() {
        let cli = Cli::parse_from(["wordtally", "count", "notes", "-n", "5", "--strip-symbols"]);
        let Commands::Count { args, no_summary } = cli.command else {
            unreachable!("expected count command");
        };
        assert_eq!(args.paths, [Utf8PathBuf::from("notes")]);
        assert_eq!(args.top, Some(5));
        assert!(args.strip_symbols);
        assert!(!no_summary);
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_report() {
        assert_eq!(
            generate_csv_report(&ranked()),
            "rank,word,count\n1,the,3\n2,\"a,b\",1\n"
        );
    }

    #[test]
    fn test_json_report() {
        let stats = StatsSnapshot {
            files: 1,
            lines: 2,
            blank_lines: 0,
            tokens: 4,
        };
        let json = generate_json_report(&stats, 2, &ranked()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stats"]["tokens"], 4);
        assert_eq!(value["unique"], 2);
        assert_eq!(value["words"][0]["word"], "the");
        assert_eq!(value["words"][1]["rank"], 2);
    }

    #[test]
    fn test_summary() {
        let stats = StatsSnapshot {
            files: 2,
            lines: 5,
            blank_lines: 1,
            tokens: 8,
        };
        let mut out = Vec::new();
        print_summary(&mut out, &stats, 6).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Lines:        5 (1 blank)"));
        assert!(text.contains("Unique words: 6"));
        assert!(text.contains("Words/line:   2.0"));
    }

    #[test]
    fn test_config_file_values_without_flags() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_config(
            &utf8_dir(&dir),
            r#"{"count": {"filter": "strip_symbols", "max_parallel_jobs": 4}, "display": {"top": 10}}"#,
        );

        let cli = Cli::parse_from(["wordtally", "--config", config_path.as_str(), "count"]);
        let config = build_config(&cli, Some(count_args(&cli))).unwrap();

        assert_eq!(config.count.filter, TextFilter::StripSymbols);
        assert_eq!(config.count.max_parallel_jobs, Some(4));
        assert_eq!(config.display.top, 10);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_config(
            &utf8_dir(&dir),
            r#"{"count": {"filter": "verbatim", "max_parallel_jobs": 4}, "display": {"top": 10}}"#,
        );

        let cli = Cli::parse_from([
            "wordtally",
            "--config",
            config_path.as_str(),
            "report",
            "--strip-symbols",
            "-j",
            "2",
            "-n",
            "3",
        ]);
        let config = build_config(&cli, Some(count_args(&cli))).unwrap();

        assert_eq!(config.count.filter, TextFilter::StripSymbols);
        assert_eq!(config.count.max_parallel_jobs, Some(2));
        assert_eq!(config.display.top, 3);
    }

    #[test]
    fn test_zero_jobs_flag_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_config(&utf8_dir(&dir), "{}");

        let cli = Cli::parse_from([
            "wordtally",
            "--config",
            config_path.as_str(),
            "count",
            "-j",
            "0",
        ]);
        let err = build_config(&cli, Some(count_args(&cli))).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_missing_config_file_fails_for_words() {
        let dir = tempfile::tempdir().unwrap();
        let missing = utf8_dir(&dir).join("missing.json");

        let cli = Cli::parse_from(["wordtally", "--config", missing.as_str(), "words", "a.txt"]);
        let err = build_config(&cli, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingFile(_))
        ));
    }

    #[test]
    fn test_words_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = utf8_dir(&dir).join("one.txt");
        std::fs::write(&file, "  Hello   world  \nagain").unwrap();

        let output = words_output(&Config::default(), &[file.clone()]).unwrap();
        assert_eq!(output, format!("3\t{file}\n"));
    }

    #[test]
    fn test_words_several_files_with_total() {
        let dir = tempfile::tempdir().unwrap();
        let root = utf8_dir(&dir);
        std::fs::create_dir_all(root.join("docs")).unwrap();
        std::fs::write(root.join("docs/a.txt"), "one two three").unwrap();
        std::fs::write(root.join("docs/skip.rs"), "not counted").unwrap();
        std::fs::write(root.join("b.log"), "four five").unwrap();

        let paths = vec![root.join("docs"), root.join("b.log")];
        let output = words_output(&Config::default(), &paths).unwrap();
        assert_eq!(
            output,
            format!(
                "3\t{}\n2\t{}\n5\ttotal\n",
                root.join("docs/a.txt"),
                root.join("b.log")
            )
        );
    }

    #[test]
    fn test_words_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = utf8_dir(&dir);

        let err = words_output(&Config::default(), &[root.join("missing.txt")]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CountError>(),
            Some(CountError::NotFound(_))
        ));

        let binary = root.join("binary.txt");
        std::fs::write(&binary, b"ok \xff\xfe").unwrap();
        let err = words_output(&Config::default(), &[binary]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CountError>(),
            Some(CountError::Read { .. })
        ));
    }
}
